//! Score a receipt file

use std::path::Path;

use receipt_processor::core::services::breakdown;
use receipt_processor::output::{OutputMode, ScoreResult, ValidationResult};

use super::receipt_file;

/// Validate a receipt file and print its points
///
/// Invalid receipts are reported the way `validate` reports them and
/// exit non-zero.
pub fn score(
    file: &Path,
    explain: bool,
    config: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let validator = receipt_file::validator(config)?;
    let receipt = receipt_file::load(file)?;
    let name = file.display().to_string();

    if let Err(e) = validator.validate(&receipt) {
        ValidationResult::new(name, Err(e)).render(mode);
        std::process::exit(1);
    }

    let points = breakdown(&receipt)?;
    let result = ScoreResult {
        file: name,
        points: points.total(),
        breakdown: explain.then_some(points),
    };
    result.render(mode);

    Ok(())
}
