//! Map-backed receipt store

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::core::models::{Receipt, ReceiptId, StoredReceipt};
use crate::core::ports::ReceiptStore;

/// Receipt store backed by a `RwLock<HashMap>`
///
/// Writes take the lock exclusively, so a `put` is visible to every `get`
/// that starts after it returns.
#[derive(Debug, Default)]
pub struct InMemoryReceiptStore {
    receipts: RwLock<HashMap<ReceiptId, StoredReceipt>>,
}

impl InMemoryReceiptStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReceiptStore for InMemoryReceiptStore {
    fn put(&self, id: &ReceiptId, receipt: Receipt) -> anyhow::Result<()> {
        let mut receipts = self.receipts.write().unwrap_or_else(PoisonError::into_inner);
        if receipts.contains_key(id) {
            anyhow::bail!("Receipt '{id}' already exists");
        }
        receipts.insert(id.clone(), StoredReceipt::new(id.clone(), receipt));
        Ok(())
    }

    fn get(&self, id: &ReceiptId) -> anyhow::Result<Option<Receipt>> {
        let receipts = self.receipts.read().unwrap_or_else(PoisonError::into_inner);
        Ok(receipts.get(id).map(|stored| stored.receipt.clone()))
    }

    fn len(&self) -> usize {
        self.receipts.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
