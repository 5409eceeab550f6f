//! Funds and category-budget guards for new expenses.

use crate::errors::{LedgerError, LedgerResult};
use crate::ledger::{normalize_category, Ledger};

/// Stateless spending checks that operate over [`Ledger`] snapshots.
pub struct BudgetService;

impl BudgetService {
    pub fn can_spend(ledger: &Ledger, amount: f64) -> bool {
        amount <= ledger.available_funds()
    }

    /// Fails with [`LedgerError::InsufficientFunds`] when `amount` exceeds the balance.
    pub fn ensure_funds(ledger: &Ledger, amount: f64) -> LedgerResult<()> {
        let available = ledger.available_funds();
        if available.is_nan() || amount > available {
            return Err(LedgerError::InsufficientFunds {
                requested: amount,
                available,
            });
        }
        Ok(())
    }

    /// Checks `amount` against the first budget matching the normalized category.
    ///
    /// Current spend is summed over expenses stored under the normalized
    /// spelling only, so `"food"` expenses do not count towards a `"Food"`
    /// budget while `"Food"` expenses do.
    pub fn ensure_within_budget(ledger: &Ledger, category: &str, amount: f64) -> LedgerResult<()> {
        let normalized = normalize_category(category);
        let Some(budget) = ledger.budget_for(&normalized) else {
            return Ok(());
        };
        if budget.amount <= 0.0 {
            return Ok(());
        }
        let spent = ledger.category_expense(&normalized);
        if spent + amount > budget.amount {
            return Err(LedgerError::BudgetExceeded {
                category: normalized,
                budget: budget.amount,
                spent,
                requested: amount,
            });
        }
        Ok(())
    }

    /// Remaining headroom for the normalized category, if a budget applies.
    pub fn remaining_budget(ledger: &Ledger, category: &str) -> Option<f64> {
        let normalized = normalize_category(category);
        ledger
            .budget_for(&normalized)
            .map(|budget| budget.amount - ledger.category_expense(&normalized))
    }
}
