//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::ReceiptError;
use crate::core::services::PointsBreakdown;
use crate::openapi::ApiDocument;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of validating a receipt file
#[derive(Debug, Serialize)]
pub struct ValidationResult {
    /// File that was checked
    pub file: String,
    /// Whether the receipt would be accepted
    pub valid: bool,
    /// Failure messages, one per problem
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Build a result from the validator outcome
    #[must_use]
    pub fn new(file: impl Into<String>, outcome: Result<(), ReceiptError>) -> Self {
        let errors = match outcome {
            Ok(()) => Vec::new(),
            Err(ReceiptError::FieldValidation(fields)) => {
                fields.iter().map(ToString::to_string).collect()
            },
            Err(e) => vec![e.to_string()],
        };
        Self {
            file: file.into(),
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.valid {
            println!("{} {}", "Valid:".green().bold(), self.file);
            return;
        }

        println!("{} {}", "Invalid:".red().bold(), self.file);
        for error in &self.errors {
            println!("  - {error}");
        }
    }
}

/// Result of scoring a receipt file
#[derive(Debug, Serialize)]
pub struct ScoreResult {
    /// File that was scored
    pub file: String,
    /// Total points
    pub points: u64,
    /// Per-rule contributions, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<PointsBreakdown>,
}

impl ScoreResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("{}: {} points", self.file, self.points.to_string().bold());

        if let Some(b) = &self.breakdown {
            println!();
            let rows = [
                ("retailer name", b.retailer),
                ("round dollar total", b.round_total),
                ("total multiple of 0.25", b.quarter_total),
                ("item pairs", b.item_pairs),
                ("item descriptions", b.item_descriptions),
                ("odd purchase day", b.odd_day),
                ("purchase 14:00-16:00", b.afternoon),
            ];
            for (rule, points) in rows {
                println!("  {rule:<24} {points:>6}");
            }
            println!("  {:<24} {:>6}", "total", b.total());
        }
    }
}

/// Summary of an OpenAPI document
#[derive(Debug, Serialize)]
pub struct SpecResult {
    /// API title
    pub title: String,
    /// API version
    pub version: String,
    /// API description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `METHOD path` operations
    pub operations: Vec<String>,
}

impl From<&ApiDocument> for SpecResult {
    fn from(doc: &ApiDocument) -> Self {
        Self {
            title: doc.info.title.clone(),
            version: doc.info.version.clone(),
            description: doc.info.description.clone(),
            operations: doc.operations(),
        }
    }
}

impl SpecResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        match &self.description {
            Some(description) => {
                println!("{} {} - {}\n", self.title.bold(), self.version, description);
            },
            None => println!("{} {}\n", self.title.bold(), self.version),
        }
        for operation in &self.operations {
            println!("  {operation}");
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
