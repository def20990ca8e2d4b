//! Domain models for receipt processing
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Receipt`] / [`Item`] - What a client submits
//! - [`StoredReceipt`] - An accepted receipt and its identifier
//! - [`ReceiptId`] - Opaque identifier handed back to clients
//! - [`money`] - Exact decimal parsing for money fields

pub mod money;
mod receipt;
mod receipt_id;

pub use money::{format_cents, parse_money};
pub use receipt::{Item, Receipt, StoredReceipt};
pub use receipt_id::ReceiptId;
