//! OpenAPI document loading
//!
//! The service can announce the API it implements from an OpenAPI 3
//! document. Only the `info` block and the path list are read; YAML and
//! JSON documents are both accepted.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// OpenAPI document bundled with the service
pub const BUNDLED: &str = include_str!("../api.yml");

/// Path item keys that name an operation
const HTTP_METHODS: [&str; 8] = ["get", "put", "post", "delete", "options", "head", "patch", "trace"];

/// Errors loading an OpenAPI document
#[derive(Debug, Error)]
pub enum OpenApiError {
    /// The document could not be read
    #[error("error reading {path}: {source}")]
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The document is not valid YAML/JSON or lacks required fields
    #[error("cannot build OpenAPI model: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The document is not OpenAPI 3.x
    #[error("unsupported OpenAPI version {0:?}, expected 3.x")]
    UnsupportedVersion(String),
}

/// The parts of an OpenAPI document the service reports
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiDocument {
    /// OpenAPI version, e.g. `3.0.3`
    pub openapi: String,
    /// Title, version and description
    pub info: ApiInfo,
    /// Operations keyed by path template
    #[serde(default)]
    pub paths: BTreeMap<String, BTreeMap<String, serde_yaml::Value>>,
}

/// The `info` block of an OpenAPI document
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiInfo {
    /// API title
    pub title: String,
    /// API version
    pub version: String,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
}

impl ApiDocument {
    /// One-line banner: `title version - description`
    #[must_use]
    pub fn banner(&self) -> String {
        match self.info.description.as_deref().map(str::trim) {
            Some(description) if !description.is_empty() => {
                format!("{} {} - {}", self.info.title, self.info.version, description)
            },
            _ => format!("{} {}", self.info.title, self.info.version),
        }
    }

    /// `METHOD path` pairs, sorted by path
    ///
    /// Path-level keys such as `parameters` or `summary` are not operations
    /// and are skipped.
    #[must_use]
    pub fn operations(&self) -> Vec<String> {
        self.paths
            .iter()
            .flat_map(|(path, item)| {
                item.keys()
                    .filter(|key| HTTP_METHODS.contains(&key.as_str()))
                    .map(move |method| format!("{} {path}", method.to_uppercase()))
            })
            .collect()
    }
}

/// Parse an OpenAPI 3 document from text
pub fn parse(content: &str) -> Result<ApiDocument, OpenApiError> {
    let document: ApiDocument = serde_yaml::from_str(content)?;
    if !document.openapi.starts_with("3.") {
        return Err(OpenApiError::UnsupportedVersion(document.openapi));
    }
    Ok(document)
}

/// Load an OpenAPI 3 document from a file
pub fn load(path: &Path) -> Result<ApiDocument, OpenApiError> {
    let content = fs::read_to_string(path).map_err(|source| OpenApiError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content)
}

/// The bundled document
pub fn bundled() -> Result<ApiDocument, OpenApiError> {
    parse(BUNDLED)
}
