//! Port traits (interfaces) for external dependencies
//!
//! The core validates and scores receipts but does not own where they are
//! kept. Storage is reached through [`ReceiptStore`]; implementations live in
//! the `adapters` module, and tests can substitute their own.

mod receipt_store;

pub use receipt_store::ReceiptStore;
