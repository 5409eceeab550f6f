pub mod json_backend;

use std::fmt;

use crate::{errors::LedgerResult, ledger::Ledger};

/// Ledger fields in persisted-document order.
pub const LEDGER_FIELDS: [&str; 4] = ["incomes", "expenses", "budgets", "goals"];

/// Abstraction over persistence backends holding a single ledger document.
pub trait LedgerStorage: Send + Sync {
    /// Reads the document. `Ok(None)` means no document exists yet.
    fn read(&self) -> LedgerResult<Option<LoadReport>>;

    /// Overwrites the document with the full ledger state.
    fn write(&self, ledger: &Ledger) -> LedgerResult<()>;

    /// Human-readable location of the document, used in logs and messages.
    fn describe(&self) -> String;
}

/// A successfully parsed document plus the shape repairs applied to it.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub ledger: Ledger,
    pub repairs: Vec<RepairAction>,
}

impl LoadReport {
    pub fn was_repaired(&self) -> bool {
        !self.repairs.is_empty()
    }
}

/// Per-field fix-ups applied when a document field is not list-shaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepairAction {
    /// Field absent or `null`; replaced by an empty list.
    MissingField(&'static str),
    /// Field held one record object; wrapped into a one-element list.
    WrappedSingleRecord(&'static str),
    /// Field held a scalar or other non-list value; replaced by an empty list.
    ResetField(&'static str),
}

impl fmt::Display for RepairAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepairAction::MissingField(field) => {
                write!(f, "`{field}` was missing and has been set to an empty list")
            }
            RepairAction::WrappedSingleRecord(field) => {
                write!(f, "`{field}` held a single record and has been wrapped in a list")
            }
            RepairAction::ResetField(field) => {
                write!(f, "`{field}` was not a list and has been reset")
            }
        }
    }
}

pub use json_backend::{load_ledger_from_path, save_ledger_to_path, JsonLedgerStorage};
