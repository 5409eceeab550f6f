use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    budget::Budget,
    goal::Goal,
    transaction::{Expense, Income},
};

/// The persisted ledger document: four append-ordered sequences.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    #[serde(default)]
    pub incomes: Vec<Income>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.incomes.is_empty()
            && self.expenses.is_empty()
            && self.budgets.is_empty()
            && self.goals.is_empty()
    }

    pub fn total_income(&self) -> f64 {
        self.incomes.iter().map(|income| income.amount).sum()
    }

    pub fn total_expense(&self) -> f64 {
        self.expenses.iter().map(|expense| expense.amount).sum()
    }

    pub fn available_funds(&self) -> f64 {
        self.total_income() - self.total_expense()
    }

    /// Sums expenses whose stored category equals `category` exactly.
    pub fn category_expense(&self, category: &str) -> f64 {
        self.expenses
            .iter()
            .filter(|expense| expense.is_in_category(category))
            .map(|expense| expense.amount)
            .sum()
    }

    /// Sums incomes whose stored category equals `category` exactly.
    pub fn category_income(&self, category: &str) -> f64 {
        self.incomes
            .iter()
            .filter(|income| income.is_in_category(category))
            .map(|income| income.amount)
            .sum()
    }

    /// Raw income and expense categories, de-duplicated and sorted.
    pub fn categories(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .incomes
            .iter()
            .chain(self.expenses.iter())
            .map(|txn| txn.category.as_str())
            .collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// Most recent income or expense date recorded under `category`.
    pub fn latest_activity(&self, category: &str) -> Option<NaiveDate> {
        self.incomes
            .iter()
            .chain(self.expenses.iter())
            .filter(|txn| txn.is_in_category(category))
            .map(|txn| txn.date)
            .max()
    }

    /// First budget whose normalized category matches.
    pub fn budget_for(&self, normalized_category: &str) -> Option<&Budget> {
        self.budgets
            .iter()
            .find(|budget| budget.applies_to(normalized_category))
    }

    pub fn total_budgeted(&self) -> f64 {
        self.budgets.iter().map(|budget| budget.amount).sum()
    }

    pub fn total_goal_amount(&self) -> f64 {
        self.goals.iter().map(|goal| goal.amount).sum()
    }
}
