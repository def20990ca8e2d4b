//! Adapter implementations for port traits
//!
//! This module contains concrete implementations of the core ports:
//!
//! - `memory/` - Process-local receipt storage

pub mod memory;

pub use memory::InMemoryReceiptStore;
