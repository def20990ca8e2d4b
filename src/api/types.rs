//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client. The
//! request body for `POST /receipts/process` is a [`Receipt`] as-is.
//!
//! [`Receipt`]: crate::core::models::Receipt

use serde::{Deserialize, Serialize};

/// Response for an accepted receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessReceiptData {
    /// Identifier to redeem for points
    pub id: String,
}

/// Response for a points lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsData {
    /// Points awarded to the receipt
    pub points: u64,
}

/// Response for the health check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthData {
    /// Always `ok` when the service answers
    pub status: String,
    /// Service version
    pub version: String,
    /// Number of receipts currently stored
    pub receipts: usize,
}
