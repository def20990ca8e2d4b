//! Core domain logic for receipt processing
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Receipt, Item, `ReceiptId`, money)
//! - `services/` - Validation and scoring
//! - `ports/` - Trait definitions for external dependencies
//! - `error` - The receipt error taxonomy

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::{FieldError, ReceiptError};
