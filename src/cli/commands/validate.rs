//! Validate a receipt file

use std::path::Path;

use receipt_processor::output::{OutputMode, ValidationResult};

use super::receipt_file;

/// Check a receipt file, exiting non-zero when it would be rejected
pub fn validate(file: &Path, config: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let validator = receipt_file::validator(config)?;
    let receipt = receipt_file::load(file)?;
    let outcome = validator.validate(&receipt);

    let result = ValidationResult::new(file.display().to_string(), outcome);
    result.render(mode);

    if !result.valid {
        std::process::exit(1);
    }
    Ok(())
}
