//! In-memory receipt storage
//!
//! Implements `ReceiptStore` with a process-local map. Receipts live until
//! the process exits.

mod store;

pub use store::InMemoryReceiptStore;
