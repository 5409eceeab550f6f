//! Settlement policy for savings goals.

use chrono::NaiveDate;

use crate::errors::{LedgerError, LedgerResult};
use crate::ledger::{Expense, Goal};

/// Stateless helpers deciding whether and how a goal is settled.
pub struct GoalService;

impl GoalService {
    /// A goal is achievable while its amount fits in the remaining balance.
    pub fn ensure_achievable(goal: &Goal, available: f64) -> LedgerResult<()> {
        if available.is_nan() || goal.amount > available {
            return Err(LedgerError::InsufficientFunds {
                requested: goal.amount,
                available,
            });
        }
        Ok(())
    }

    /// Expense recorded in place of an achieved goal.
    pub fn settlement_expense(goal: &Goal, date: NaiveDate) -> Expense {
        Expense::new(goal.settlement_category(), goal.amount, date)
    }
}
