use super::sample_ledger;
use crate::core::services::BudgetService;
use crate::errors::LedgerError;
use crate::ledger::Budget;

#[test]
fn funds_check_allows_spending_the_exact_balance() {
    let ledger = sample_ledger();
    assert_eq!(ledger.available_funds(), 340.0);
    assert!(BudgetService::can_spend(&ledger, 340.0));
    assert!(BudgetService::ensure_funds(&ledger, 340.0).is_ok());

    let err = BudgetService::ensure_funds(&ledger, 340.5).unwrap_err();
    match err {
        LedgerError::InsufficientFunds {
            requested,
            available,
        } => {
            assert_eq!(requested, 340.5);
            assert_eq!(available, 340.0);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn budget_counts_only_normalized_spelling_towards_spend() {
    let ledger = sample_ledger();
    // 150 recorded under "Food"; the 30 under "food" is not counted.
    assert!(BudgetService::ensure_within_budget(&ledger, "food", 50.0).is_ok());
    let err = BudgetService::ensure_within_budget(&ledger, " FOOD ", 50.5).unwrap_err();
    match err {
        LedgerError::BudgetExceeded {
            category,
            budget,
            spent,
            requested,
        } => {
            assert_eq!(category, "Food");
            assert_eq!(budget, 200.0);
            assert_eq!(spent, 150.0);
            assert_eq!(requested, 50.5);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn categories_without_budget_are_unrestricted() {
    let ledger = sample_ledger();
    assert!(BudgetService::ensure_within_budget(&ledger, "Rent", 10_000.0).is_ok());
    assert_eq!(BudgetService::remaining_budget(&ledger, "rent"), None);
}

#[test]
fn first_matching_budget_wins() {
    let mut ledger = sample_ledger();
    ledger.budgets.push(Budget::new("Food", 5000.0));
    assert_eq!(BudgetService::remaining_budget(&ledger, "food"), Some(50.0));
    assert!(BudgetService::ensure_within_budget(&ledger, "Food", 60.0).is_err());
}

#[test]
fn nan_balance_blocks_spending() {
    let mut ledger = sample_ledger();
    ledger.incomes.push(crate::ledger::Transaction::new(
        "Windfall",
        f64::INFINITY,
        super::sample_date(5),
    ));
    ledger.expenses.push(crate::ledger::Transaction::new(
        "Splurge",
        f64::INFINITY,
        super::sample_date(6),
    ));
    assert!(ledger.available_funds().is_nan());
    assert!(!BudgetService::can_spend(&ledger, 5.0));
    assert!(matches!(
        BudgetService::ensure_funds(&ledger, 5.0),
        Err(LedgerError::InsufficientFunds { .. })
    ));
}
