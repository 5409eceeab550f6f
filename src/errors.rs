use thiserror::Error;

/// Error type that captures ledger rule violations and persistence failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Insufficient funds: requested {requested:.2}, available {available:.2}")]
    InsufficientFunds { requested: f64, available: f64 },
    #[error(
        "Budget exceeded for `{category}`: spent {spent:.2} + {requested:.2} exceeds budget of {budget:.2}"
    )]
    BudgetExceeded {
        category: String,
        budget: f64,
        spent: f64,
        requested: f64,
    },
    #[error("Persistence error: {0}")]
    Persistence(String),
    #[error("Corrupt ledger document: {0}")]
    CorruptDocument(String),
}

pub type LedgerResult<T> = Result<T, LedgerError>;

impl LedgerError {
    /// Returns `true` for errors raised before the store was touched.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            LedgerError::Validation(_)
                | LedgerError::InsufficientFunds { .. }
                | LedgerError::BudgetExceeded { .. }
        )
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::CorruptDocument(err.to_string())
    }
}
