//! Reading receipts from disk

use std::fs;
use std::path::Path;

use anyhow::Context;
use receipt_processor::config::ServiceConfig;
use receipt_processor::core::models::Receipt;
use receipt_processor::core::services::ReceiptValidator;

/// Read and parse a receipt JSON file
pub fn load(path: &Path) -> anyhow::Result<Receipt> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("{} is not a valid receipt", path.display()))
}

/// The validator the service would use under the same config
pub fn validator(config: Option<&Path>) -> anyhow::Result<ReceiptValidator> {
    Ok(ServiceConfig::load(config)?.validation.validator())
}
