//! Tests for receipt validation

use receipt_processor::core::ReceiptError;
use receipt_processor::core::models::Item;
use receipt_processor::core::services::{ReceiptValidator, validate_total};

use crate::common::{
    corner_market_receipt, receipt, single_item_receipt, target_receipt, walgreens_receipt,
};

// =============================================================================
// ACCEPTED RECEIPTS
// =============================================================================

#[test]
fn test_worked_receipts_are_valid() {
    let validator = ReceiptValidator::default();

    for r in [
        target_receipt(),
        corner_market_receipt(),
        walgreens_receipt(),
        single_item_receipt(),
    ] {
        assert_eq!(validator.validate(&r), Ok(()), "{}", r.retailer);
    }
}

#[test]
fn test_empty_items_allowed_by_default() {
    let empty = receipt("Target", "2022-01-02", "13:13", &[], "0.00");
    assert!(ReceiptValidator::default().validate(&empty).is_ok());
}

#[test]
fn test_empty_items_rejected_when_required() {
    let empty = receipt("Target", "2022-01-02", "13:13", &[], "0.00");
    let validator = ReceiptValidator::new(true);

    assert!(validator.requires_items());
    let err = validator.validate(&empty).unwrap_err();
    assert_eq!(err.fields().len(), 1);
    assert_eq!(err.fields()[0].field, "items");
}

// =============================================================================
// FIELD ERRORS
// =============================================================================

#[test]
fn test_every_bad_field_is_reported() {
    let bad = receipt(
        "Target!",
        "2022-13-01",
        "25:00",
        &[("Pepsi?", "1.2"), ("Dasani", "1.40")],
        "2.65",
    );

    let err = ReceiptValidator::default().validate(&bad).unwrap_err();
    let fields: Vec<&str> = err.fields().iter().map(|f| f.field.as_str()).collect();

    assert_eq!(
        fields,
        [
            "retailer",
            "purchaseDate",
            "purchaseTime",
            "items[0].shortDescription",
            "items[0].price",
        ]
    );
}

#[test]
fn test_field_errors_are_checked_before_total() {
    // The bad price would also break the total; the field error wins
    let bad = receipt("Target", "2022-01-01", "13:01", &[("Mountain Dew 12PK", "6.49.00")], "6.49");

    let err = ReceiptValidator::default().validate(&bad).unwrap_err();
    assert!(matches!(err, ReceiptError::FieldValidation(_)));
    assert!(err.to_string().contains("items[0].price"));
}

#[test]
fn test_retailer_must_not_be_empty() {
    let bad = receipt("", "2022-01-01", "13:01", &[], "0.00");
    let err = ReceiptValidator::default().validate(&bad).unwrap_err();
    assert_eq!(err.fields()[0].field, "retailer");
}

// =============================================================================
// TOTALS
// =============================================================================

#[test]
fn test_total_mismatch_reports_both_sides() {
    let mut r = walgreens_receipt();
    r.total = "2.66".to_string();

    let err = ReceiptValidator::default().validate(&r).unwrap_err();
    assert_eq!(
        err,
        ReceiptError::TotalMismatch {
            items_total: "2.65".to_string(),
            total: "2.66".to_string(),
        }
    );
}

#[test]
fn test_validate_total_is_exact_for_tenths() {
    // 0.10 + 0.20 == 0.30 in decimal, unlike binary floating point
    let r = receipt("A", "2022-01-01", "00:00", &[("a", "0.10"), ("b", "0.20")], "0.30");
    assert_eq!(validate_total(&r), Ok(()));
}

#[test]
fn test_validate_total_on_its_own_reports_malformed_money() {
    let mut r = single_item_receipt();
    r.items = vec![Item::new("Pepsi", "one dollar")];

    let err = validate_total(&r).unwrap_err();
    assert!(matches!(err, ReceiptError::MalformedMoney { .. }));
}

#[test]
fn test_item_sum_beyond_decimal_range_is_rejected() {
    // Each price is valid money, but the sum does not fit a Decimal
    let huge = "50000000000000000000000000000.00";
    let r = receipt("Target", "2022-01-01", "13:01", &[("abc", huge), ("abd", huge)], huge);

    assert_eq!(
        ReceiptValidator::default().validate(&r),
        Err(ReceiptError::OutOfRange {
            field: "items".to_string()
        })
    );
}

#[test]
fn test_non_ascii_digits_fail_validation() {
    let r = receipt("Target", "٢٠٢٢-01-01", "13:01", &[("Pepsi", "1.25")], "1.25");

    let err = ReceiptValidator::default().validate(&r).unwrap_err();
    assert_eq!(err.fields()[0].field, "purchaseDate");
}
