//! receipt-processor - A small web service that validates purchase receipts
//! and scores them for points
//!
//! Run `receipt-processor serve` to start the HTTP API, or use the `score`
//! and `validate` commands to check receipt files offline.

// Deny all clippy warnings in this crate
#![deny(clippy::all, clippy::pedantic, clippy::nursery, unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
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

mod cli;

/// Main entry point for the receipt-processor CLI
fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
