//! Ledger domain models and persistence-friendly types.

pub mod budget;
pub mod category;
pub mod goal;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod transaction;

pub use budget::Budget;
pub use category::{goal_settlement_label, normalize_category};
pub use goal::{Goal, GoalSettlement};
pub use ledger::Ledger;
pub use transaction::{Expense, Income, Transaction};
