//! Business logic services
//!
//! Pure functions over receipts. These services have no I/O dependencies
//! and keep no state between calls.
//!
//! - [`validator`] - Decide whether a receipt is well-formed
//! - [`scorer`] - Compute a receipt's points

pub mod scorer;
pub mod validator;

pub use scorer::{PointsBreakdown, breakdown, score};
pub use validator::{
    ReceiptValidator, is_valid_date, is_valid_money, is_valid_retailer_name,
    is_valid_short_description, is_valid_time, validate_total,
};
