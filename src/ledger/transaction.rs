use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::normalize_category;

/// A dated cash movement recorded against a free-text category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
}

/// Money coming into the ledger.
pub type Income = Transaction;

/// Money leaving the ledger, including goal settlements.
pub type Expense = Transaction;

impl Transaction {
    pub fn new(category: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self {
            category: category.into(),
            amount,
            date,
        }
    }

    /// Category label as shown to users; the stored string is left untouched.
    pub fn display_category(&self) -> String {
        normalize_category(&self.category)
    }

    pub fn is_in_category(&self, category: &str) -> bool {
        self.category == category
    }
}
