pub mod budget_service;
pub mod goal_service;
pub mod summary_service;
pub mod transaction_service;

pub use budget_service::BudgetService;
pub use goal_service::GoalService;
pub use summary_service::{CategorySummary, ExpenseShare, LedgerOverview, SummaryService};
pub use transaction_service::TransactionService;

#[cfg(test)]
mod tests;
