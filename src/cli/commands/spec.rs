//! Show an OpenAPI document

use std::path::Path;

use receipt_processor::openapi;
use receipt_processor::output::{OutputMode, SpecResult};

/// Print the title, version and operations of an OpenAPI document
pub fn spec(file: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let document = match file {
        Some(path) => openapi::load(path)?,
        None => openapi::bundled()?,
    };

    SpecResult::from(&document).render(mode);
    Ok(())
}
