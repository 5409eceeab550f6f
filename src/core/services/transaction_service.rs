//! Input validation shared by every add-operation.

use crate::errors::{LedgerError, LedgerResult};

/// Stateless validation helpers applied before anything reaches the store.
pub struct TransactionService;

impl TransactionService {
    /// Rejects zero, negative and non-finite amounts.
    pub fn validate_amount(amount: f64) -> LedgerResult<f64> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::Validation(format!(
                "amount must be a positive number, got {amount}"
            )));
        }
        Ok(amount)
    }

    /// Rejects an amount that would push a running total past the representable range.
    pub fn ensure_finite_total(field: &str, current_total: f64, amount: f64) -> LedgerResult<()> {
        if !(current_total + amount).is_finite() {
            return Err(LedgerError::Validation(format!(
                "{field} total would overflow after adding {amount}"
            )));
        }
        Ok(())
    }

    /// Trims a required text field, rejecting blank input.
    pub fn validate_label(field: &str, value: &str) -> LedgerResult<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(LedgerError::Validation(format!("{field} cannot be empty")));
        }
        Ok(trimmed.to_string())
    }

    /// Parses user-supplied amount text, for front ends that collect strings.
    pub fn parse_amount(raw: &str) -> LedgerResult<f64> {
        let amount = raw.trim().parse::<f64>().map_err(|_| {
            LedgerError::Validation(format!("`{}` is not a valid amount", raw.trim()))
        })?;
        Self::validate_amount(amount)
    }
}
