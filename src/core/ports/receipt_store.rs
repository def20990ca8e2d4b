//! Receipt store port
//!
//! Defines the interface for keeping accepted receipts.

use crate::core::models::{Receipt, ReceiptId};

/// Storage for accepted receipts, keyed by identifier
///
/// Entries are immutable: `put` inserts a new key and never replaces an
/// existing one. A `put` is visible to every later `get` for the same id,
/// from any thread.
pub trait ReceiptStore: Send + Sync {
    /// Store a receipt under a fresh identifier
    ///
    /// Fails if the identifier is already taken.
    fn put(&self, id: &ReceiptId, receipt: Receipt) -> anyhow::Result<()>;

    /// Look up a receipt
    fn get(&self, id: &ReceiptId) -> anyhow::Result<Option<Receipt>>;

    /// Number of stored receipts
    fn len(&self) -> usize;

    /// Whether the store holds no receipts
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
