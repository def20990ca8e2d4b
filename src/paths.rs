//! Centralized path definitions
//!
//! ```text
//! <config dir>/receipt-processor/
//! └── config.toml               # Service settings
//! ```
//!
//! `<config dir>` is the platform config directory (`~/.config` on Linux).

use std::path::PathBuf;

/// Directory name under the platform config directory
const CONFIG_DIR_NAME: &str = "receipt-processor";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Get the service config directory.
///
/// Falls back to the current directory when the platform has no config dir.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join(CONFIG_DIR_NAME)
}

/// Get the default config file path.
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}
