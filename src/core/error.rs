//! Receipt error taxonomy
//!
//! Every variant is a normal, recoverable outcome of handling caller input.
//! The core never logs or retries; callers decide how to surface these.

use std::fmt;

use thiserror::Error;

/// A single field that failed its format check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Path to the field, e.g. `retailer` or `items[2].price`
    pub field: String,
    /// What the field was expected to look like
    pub reason: &'static str,
}

impl FieldError {
    /// Create a field error
    #[must_use]
    pub fn new(field: impl Into<String>, reason: &'static str) -> Self {
        Self {
            field: field.into(),
            reason,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Errors produced while validating, scoring or looking up receipts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReceiptError {
    /// One or more fields failed their format predicate
    #[error("invalid receipt fields: {}", join_fields(.0))]
    FieldValidation(Vec<FieldError>),

    /// The item prices do not add up to the declared total
    #[error("sum of item prices {items_total} does not equal total {total}")]
    TotalMismatch {
        /// Sum of item prices, formatted to two decimals
        items_total: String,
        /// Declared total, formatted to two decimals
        total: String,
    },

    /// A money field could not be parsed as a non-negative decimal
    #[error("malformed money value in {field}: {value:?}")]
    MalformedMoney {
        /// Field path holding the bad value
        field: String,
        /// The raw text that failed to parse
        value: String,
    },

    /// A sum of amounts or points does not fit the supported range
    #[error("{field} exceeds the supported range")]
    OutOfRange {
        /// What overflowed, e.g. `items` or `points`
        field: String,
    },

    /// No receipt is stored under the identifier
    #[error("no receipt found for id {0}")]
    NotFound(String),
}

impl ReceiptError {
    pub(crate) fn out_of_range(field: &str) -> Self {
        Self::OutOfRange {
            field: field.to_string(),
        }
    }

    /// Fields that failed validation, empty for other variants
    #[must_use]
    pub fn fields(&self) -> &[FieldError] {
        match self {
            Self::FieldValidation(fields) => fields,
            _ => &[],
        }
    }
}

fn join_fields(fields: &[FieldError]) -> String {
    fields.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}
