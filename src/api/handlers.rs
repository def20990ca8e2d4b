//! Pure API handlers
//!
//! These handlers contain business logic and are HTTP-agnostic.
//! They take typed input and return `Result<T, ApiError>`.

use log::{info, warn};

use crate::core::ReceiptError;
use crate::core::models::{Receipt, ReceiptId};
use crate::core::ports::ReceiptStore;
use crate::core::services::{ReceiptValidator, score};

use super::error::ApiError;
use super::types::{HealthData, PointsData, ProcessReceiptData};

// =============================================================================
// RECEIPTS
// =============================================================================

/// Validate a receipt and store it under a fresh identifier
pub fn process_receipt(
    store: &dyn ReceiptStore,
    validator: &ReceiptValidator,
    receipt: Receipt,
) -> Result<ProcessReceiptData, ApiError> {
    if let Err(e) = validator.validate(&receipt) {
        warn!("Rejected receipt from {:?}: {e}", receipt.retailer);
        return Err(e.into());
    }

    let id = ReceiptId::generate();
    store.put(&id, receipt).map_err(|e| ApiError::internal(e.to_string()))?;
    info!("Added receipt {id}");

    Ok(ProcessReceiptData { id: id.to_string() })
}

/// Score the receipt stored under `id`
///
/// Ids that are not UUIDs are reported as not found.
pub fn get_points(store: &dyn ReceiptStore, id: &str) -> Result<PointsData, ApiError> {
    let receipt = ReceiptId::parse(id)
        .map(|receipt_id| store.get(&receipt_id))
        .transpose()
        .map_err(|e| ApiError::internal(e.to_string()))?
        .flatten();

    let Some(receipt) = receipt else {
        warn!("No receipt found for id: {id}");
        return Err(ReceiptError::NotFound(id.to_string()).into());
    };

    let points = score(&receipt)?;
    info!("{points} points found for id {id}");

    Ok(PointsData { points })
}

// =============================================================================
// STATUS
// =============================================================================

/// Report liveness and how many receipts are held
#[must_use]
pub fn health(store: &dyn ReceiptStore) -> HealthData {
    HealthData {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        receipts: store.len(),
    }
}
