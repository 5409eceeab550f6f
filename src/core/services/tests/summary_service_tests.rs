use super::{sample_date, sample_ledger};
use crate::core::services::SummaryService;
use crate::ledger::Ledger;

#[test]
fn overview_reports_totals_and_counts() {
    let overview = SummaryService::overview(&sample_ledger());
    assert_eq!(overview.total_income, 1020.0);
    assert_eq!(overview.total_expense, 680.0);
    assert_eq!(overview.balance, 340.0);
    assert_eq!(overview.budget_count, 1);
    assert_eq!(overview.total_budgeted, 200.0);
    assert_eq!(overview.goal_count, 1);
    assert_eq!(overview.total_goal_amount, 250.0);
}

#[test]
fn category_rows_follow_sorted_raw_categories() {
    let rows = SummaryService::category_summaries(&sample_ledger());
    let names: Vec<_> = rows.iter().map(|row| row.category.as_str()).collect();
    assert_eq!(names, vec!["Food", "Rent", "Salary", "food"]);

    let lower_food = &rows[3];
    assert_eq!(lower_food.income, 20.0);
    assert_eq!(lower_food.expense, 30.0);
    assert_eq!(lower_food.latest_date, Some(sample_date(9)));

    let salary = &rows[2];
    assert_eq!(salary.expense, 0.0);
    assert_eq!(salary.latest_date, Some(sample_date(1)));
}

#[test]
fn breakdown_groups_in_first_seen_order() {
    let shares = SummaryService::expense_breakdown(&sample_ledger());
    let names: Vec<_> = shares.iter().map(|share| share.category.as_str()).collect();
    assert_eq!(names, vec!["Food", "food", "Rent"]);
    let total: f64 = shares.iter().map(|share| share.percent).sum();
    assert!((total - 100.0).abs() < 1e-9);
    assert!((shares[2].percent - 500.0 / 680.0 * 100.0).abs() < 1e-9);
}

#[test]
fn empty_ledger_has_no_breakdown() {
    assert!(SummaryService::expense_breakdown(&Ledger::new()).is_empty());
    assert!(SummaryService::category_summaries(&Ledger::new()).is_empty());
}
