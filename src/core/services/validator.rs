//! Receipt validator - decides whether a receipt may be stored
//!
//! Field checks are plain predicates over strings. [`ReceiptValidator`]
//! composes them, collects every failing field, and only then checks that
//! the item prices add up to the declared total.
//!
//! Digits and whitespace are ASCII only: `٢٠٢٢` is not a year and a
//! non-breaking space is not a space.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::core::error::{FieldError, ReceiptError};
use crate::core::models::{Receipt, format_cents, parse_money};

static RETAILER_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_\t\n\f\r \-&]+$").expect("valid retailer regex"));

static SHORT_DESCRIPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_\t\n\f\r \-]+$").expect("valid description regex"));

static MONEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("valid money regex"));

static DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-(1[0-2]|0[1-9])-(3[01]|[12][0-9]|0[1-9])$").expect("valid date regex")
});

static TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^24:00$|^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("valid time regex")
});

const RETAILER_REASON: &str = "letters, digits, whitespace, '-' or '&'";
const DESCRIPTION_REASON: &str = "letters, digits, whitespace or '-'";
const MONEY_REASON: &str = "a decimal amount with exactly two fraction digits";
const DATE_REASON: &str = "a date formatted YYYY-MM-DD";
const TIME_REASON: &str = "a 24-hour time formatted HH:MM";
const ITEMS_REASON: &str = "at least one item";

/// Retailer names: non-empty word characters, whitespace, `-` and `&`
#[must_use]
pub fn is_valid_retailer_name(s: &str) -> bool {
    !s.is_empty() && RETAILER_NAME.is_match(s)
}

/// Item descriptions: non-empty word characters, whitespace and `-`
#[must_use]
pub fn is_valid_short_description(s: &str) -> bool {
    SHORT_DESCRIPTION.is_match(s)
}

/// Money: digits, a dot, and exactly two digits
#[must_use]
pub fn is_valid_money(s: &str) -> bool {
    MONEY.is_match(s)
}

/// Dates: `YYYY-MM-DD`, month 01-12, day 01-31
///
/// Days are not checked against the month, so `2023-02-30` passes.
#[must_use]
pub fn is_valid_date(s: &str) -> bool {
    DATE.is_match(s)
}

/// Times: `00:00` through `23:59`, plus `24:00`
#[must_use]
pub fn is_valid_time(s: &str) -> bool {
    TIME.is_match(s)
}

/// Check that the item prices sum to the declared total
///
/// Each price is rounded to cents before summing and the comparison is made
/// on the two-decimal text of both sides.
pub fn validate_total(receipt: &Receipt) -> Result<(), ReceiptError> {
    let total = parse_money("total", &receipt.total)?;

    let mut items_total = Decimal::ZERO;
    for (index, item) in receipt.items.iter().enumerate() {
        let price = parse_money(&format!("items[{index}].price"), &item.price)?;
        items_total = items_total
            .checked_add(price.round_dp(2))
            .ok_or_else(|| ReceiptError::out_of_range("items"))?;
    }

    let items_total = format_cents(items_total);
    let total = format_cents(total);
    if items_total == total {
        Ok(())
    } else {
        Err(ReceiptError::TotalMismatch { items_total, total })
    }
}

/// Validates receipts before they are stored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReceiptValidator {
    require_items: bool,
}

impl ReceiptValidator {
    /// Create a validator
    ///
    /// With `require_items` an empty `items` list is rejected; otherwise it
    /// is accepted as long as the total is `0.00`.
    #[must_use]
    pub const fn new(require_items: bool) -> Self {
        Self { require_items }
    }

    /// Whether an empty item list is rejected
    #[must_use]
    pub const fn requires_items(&self) -> bool {
        self.require_items
    }

    /// Run field checks, then the total check
    pub fn validate(&self, receipt: &Receipt) -> Result<(), ReceiptError> {
        let errors = self.field_errors(receipt);
        if !errors.is_empty() {
            return Err(ReceiptError::FieldValidation(errors));
        }
        validate_total(receipt)
    }

    /// Every field that fails its predicate, in document order
    #[must_use]
    pub fn field_errors(&self, receipt: &Receipt) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if !is_valid_retailer_name(&receipt.retailer) {
            errors.push(FieldError::new("retailer", RETAILER_REASON));
        }
        if !is_valid_date(&receipt.purchase_date) {
            errors.push(FieldError::new("purchaseDate", DATE_REASON));
        }
        if !is_valid_time(&receipt.purchase_time) {
            errors.push(FieldError::new("purchaseTime", TIME_REASON));
        }
        if self.require_items && receipt.items.is_empty() {
            errors.push(FieldError::new("items", ITEMS_REASON));
        }
        for (index, item) in receipt.items.iter().enumerate() {
            if !is_valid_short_description(&item.short_description) {
                errors.push(FieldError::new(
                    format!("items[{index}].shortDescription"),
                    DESCRIPTION_REASON,
                ));
            }
            if !is_valid_money(&item.price) {
                errors.push(FieldError::new(format!("items[{index}].price"), MONEY_REASON));
            }
        }
        if !is_valid_money(&receipt.total) {
            errors.push(FieldError::new("total", MONEY_REASON));
        }

        errors
    }
}
