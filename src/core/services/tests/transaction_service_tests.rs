use crate::core::services::TransactionService;
use crate::errors::LedgerError;

#[test]
fn rejects_non_positive_and_non_finite_amounts() {
    for amount in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(
            matches!(
                TransactionService::validate_amount(amount),
                Err(LedgerError::Validation(_))
            ),
            "{amount} should be rejected"
        );
    }
    assert_eq!(TransactionService::validate_amount(0.01).unwrap(), 0.01);
}

#[test]
fn labels_are_trimmed_and_required() {
    assert_eq!(
        TransactionService::validate_label("category", "  Rent ").unwrap(),
        "Rent"
    );
    let err = TransactionService::validate_label("goal name", "   ").unwrap_err();
    assert_eq!(err.to_string(), "Invalid input: goal name cannot be empty");
}

#[test]
fn parses_amount_text() {
    assert_eq!(TransactionService::parse_amount(" 12.50 ").unwrap(), 12.5);
    assert!(TransactionService::parse_amount("twelve").is_err());
    assert!(TransactionService::parse_amount("-3").is_err());
}

#[test]
fn totals_must_stay_finite() {
    assert!(TransactionService::ensure_finite_total("income", 1e308, 1.0).is_ok());
    assert!(matches!(
        TransactionService::ensure_finite_total("income", 1e308, 1e308),
        Err(LedgerError::Validation(_))
    ));
}
