//! Receipt and item records as submitted by clients
//!
//! Field names follow the wire format (`purchaseDate`, `shortDescription`, ...).
//! Values are kept as the text the client sent; formats are checked by the
//! validator and money is parsed on demand.

use serde::{Deserialize, Serialize};

use super::receipt_id::ReceiptId;

/// A purchase receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Retailer or store name
    pub retailer: String,
    /// Date of purchase, `YYYY-MM-DD`
    pub purchase_date: String,
    /// Time of purchase, 24-hour `HH:MM`
    pub purchase_time: String,
    /// Purchased line items
    pub items: Vec<Item>,
    /// Total amount paid, e.g. `35.35`
    pub total: String,
}

/// A single line item on a receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Short product description
    pub short_description: String,
    /// Price paid for this item
    pub price: String,
}

impl Item {
    /// Create an item from a description and price
    #[must_use]
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// A receipt that passed validation and was assigned an identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredReceipt {
    /// Identifier handed back to the client
    pub id: ReceiptId,
    /// The accepted receipt
    pub receipt: Receipt,
}

impl StoredReceipt {
    /// Pair a receipt with its identifier
    #[must_use]
    pub const fn new(id: ReceiptId, receipt: Receipt) -> Self {
        Self { id, receipt }
    }
}
