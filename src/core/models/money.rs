//! Money amounts
//!
//! Amounts travel as text (`"12.25"`) and are parsed into exact decimals so
//! sums and products never pick up binary floating-point error.

use rust_decimal::Decimal;

use crate::core::error::ReceiptError;

/// Parse a money field into a non-negative decimal
///
/// `field` is only used to label the error.
pub fn parse_money(field: &str, value: &str) -> Result<Decimal, ReceiptError> {
    value
        .parse::<Decimal>()
        .ok()
        .filter(|amount| !amount.is_sign_negative())
        .ok_or_else(|| ReceiptError::MalformedMoney {
            field: field.to_string(),
            value: value.to_string(),
        })
}

/// Format an amount with exactly two fraction digits
#[must_use]
pub fn format_cents(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}
