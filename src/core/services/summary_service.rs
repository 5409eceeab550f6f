//! Aggregation helpers for summary screens and the expense chart.

use chrono::NaiveDate;

use crate::ledger::Ledger;

/// Headline figures for the whole ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerOverview {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    pub budget_count: usize,
    pub total_budgeted: f64,
    pub goal_count: usize,
    pub total_goal_amount: f64,
}

/// Per-category totals keyed by the raw stored category string.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub category: String,
    pub income: f64,
    pub expense: f64,
    pub latest_date: Option<NaiveDate>,
}

/// One slice of the expense breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseShare {
    pub category: String,
    pub amount: f64,
    pub percent: f64,
}

/// Aggregates ledger data for display.
pub struct SummaryService;

impl SummaryService {
    pub fn overview(ledger: &Ledger) -> LedgerOverview {
        let total_income = ledger.total_income();
        let total_expense = ledger.total_expense();
        LedgerOverview {
            total_income,
            total_expense,
            balance: total_income - total_expense,
            budget_count: ledger.budgets.len(),
            total_budgeted: ledger.total_budgeted(),
            goal_count: ledger.goals.len(),
            total_goal_amount: ledger.total_goal_amount(),
        }
    }

    /// One row per category from [`Ledger::categories`], in the same order.
    pub fn category_summaries(ledger: &Ledger) -> Vec<CategorySummary> {
        ledger
            .categories()
            .into_iter()
            .map(|category| CategorySummary {
                income: ledger.category_income(&category),
                expense: ledger.category_expense(&category),
                latest_date: ledger.latest_activity(&category),
                category,
            })
            .collect()
    }

    /// Expense totals grouped by raw category in first-seen order.
    pub fn expense_breakdown(ledger: &Ledger) -> Vec<ExpenseShare> {
        let mut shares: Vec<ExpenseShare> = Vec::new();
        for expense in &ledger.expenses {
            match shares
                .iter_mut()
                .find(|share| share.category == expense.category)
            {
                Some(share) => share.amount += expense.amount,
                None => shares.push(ExpenseShare {
                    category: expense.category.clone(),
                    amount: expense.amount,
                    percent: 0.0,
                }),
            }
        }
        let total: f64 = shares.iter().map(|share| share.amount).sum();
        if total > 0.0 {
            for share in &mut shares {
                share.percent = share.amount / total * 100.0;
            }
        }
        shares
    }
}
