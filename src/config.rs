//! Service configuration
//!
//! Settings come from a TOML file, then environment variables, then CLI
//! flags, each layer overriding the one before. The default file lives at
//! `<config dir>/receipt-processor/config.toml` (see [`crate::paths`]).
//!
//! ```toml
//! openapi = "api.yml"
//!
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//! workers = 4
//!
//! [rate_limit]
//! enabled = true
//! requests_per_second = 1.0
//! burst = 5
//!
//! [validation]
//! require_items = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::services::ReceiptValidator;
use crate::paths;

/// Environment variable overriding the listen port
pub const PORT_ENV: &str = "PORT";

/// Environment variable overriding the listen host
pub const HOST_ENV: &str = "RECEIPT_PROCESSOR_HOST";

/// Environment variable overriding the worker thread count
pub const WORKERS_ENV: &str = "RECEIPT_PROCESSOR_WORKERS";

/// Errors loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`ServiceConfig`]
    #[error("failed to parse config {path}: {source}")]
    Parse {
        /// Path that was parsed
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// A value is out of range
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level service configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Request rate limiting
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    /// Receipt validation options
    #[serde(default)]
    pub validation: ValidationConfig,
    /// OpenAPI document announced at startup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openapi: Option<PathBuf>,
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
    /// Number of request worker threads
    #[serde(default = "default_workers")]
    pub workers: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8080
}

const fn default_workers() -> usize {
    4
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string for binding
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Token-bucket rate limit shared by all clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Whether requests are limited at all
    #[serde(default = "default_rate_limit_enabled")]
    pub enabled: bool,
    /// Tokens added per second
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: f64,
    /// Bucket capacity
    #[serde(default = "default_burst")]
    pub burst: u32,
}

const fn default_rate_limit_enabled() -> bool {
    true
}

const fn default_requests_per_second() -> f64 {
    1.0
}

const fn default_burst() -> u32 {
    5
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: default_rate_limit_enabled(),
            requests_per_second: default_requests_per_second(),
            burst: default_burst(),
        }
    }
}

/// Receipt validation options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Reject receipts with an empty `items` list
    #[serde(default)]
    pub require_items: bool,
}

impl ValidationConfig {
    /// Validator applying these options
    #[must_use]
    pub const fn validator(&self) -> ReceiptValidator {
        ReceiptValidator::new(self.require_items)
    }
}

impl ServiceConfig {
    /// Default config file location
    #[must_use]
    pub fn default_path() -> PathBuf {
        paths::config_file()
    }

    /// Load configuration
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used if present and built-in defaults otherwise. Environment overrides
    /// are applied afterwards.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Self::default_path();
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    debug!("No config at {}, using defaults", default_path.display());
                    Self::default()
                }
            },
        };

        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply environment overrides using `lookup` to read variables
    ///
    /// Unparsable values are logged and ignored.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(port) = lookup(PORT_ENV) {
            match port.trim().parse() {
                Ok(port) => self.server.port = port,
                Err(e) => warn!("Invalid {PORT_ENV} value {port:?}: {e}"),
            }
        }
        if let Some(host) = lookup(HOST_ENV) {
            self.server.host = host;
        }
        if let Some(workers) = lookup(WORKERS_ENV) {
            match workers.trim().parse() {
                Ok(workers) => self.server.workers = workers,
                Err(e) => warn!("Invalid {WORKERS_ENV} value {workers:?}: {e}"),
            }
        }
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.workers == 0 {
            return Err(ConfigError::Invalid("server.workers must be at least 1".to_string()));
        }
        if self.rate_limit.enabled {
            let rate = self.rate_limit.requests_per_second;
            if !rate.is_finite() || rate <= 0.0 {
                return Err(ConfigError::Invalid(
                    "rate_limit.requests_per_second must be positive".to_string(),
                ));
            }
            if self.rate_limit.burst == 0 {
                return Err(ConfigError::Invalid(
                    "rate_limit.burst must be at least 1".to_string(),
                ));
            }
        }
        Ok(())
    }
}
