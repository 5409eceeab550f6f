mod budget_service_tests;
mod summary_service_tests;
mod transaction_service_tests;

use chrono::NaiveDate;

use crate::ledger::{Budget, Goal, Ledger, Transaction};

pub(super) fn sample_date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, day).unwrap()
}

pub(super) fn sample_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger
        .incomes
        .push(Transaction::new("Salary", 1000.0, sample_date(1)));
    ledger
        .incomes
        .push(Transaction::new("food", 20.0, sample_date(3)));
    ledger
        .expenses
        .push(Transaction::new("Food", 150.0, sample_date(4)));
    ledger
        .expenses
        .push(Transaction::new("food", 30.0, sample_date(9)));
    ledger
        .expenses
        .push(Transaction::new("Rent", 500.0, sample_date(2)));
    ledger.budgets.push(Budget::new(" food", 200.0));
    ledger.goals.push(Goal::new("Bike", 250.0));
    ledger
}
