//! receipt-processor - A small web service that validates purchase receipts
//! and scores them for points
//!
//! This library provides the receipt model and its validation rules, the
//! points scorer, an in-memory receipt store, and the HTTP server that
//! exposes them.

// Deny all clippy warnings in this crate
#![deny(clippy::all, clippy::pedantic, clippy::nursery, unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod openapi;
pub mod output;
pub mod paths;
pub mod server;
