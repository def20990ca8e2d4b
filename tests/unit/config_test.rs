//! Tests for service configuration

use std::collections::HashMap;
use std::fs;

use receipt_processor::config::{
    ConfigError, HOST_ENV, PORT_ENV, ServiceConfig, WORKERS_ENV,
};
use tempfile::TempDir;

fn env<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    let vars: HashMap<&str, &str> = vars.iter().copied().collect();
    move |key| vars.get(key).map(ToString::to_string)
}

// =============================================================================
// PARSING
// =============================================================================

#[test]
fn test_defaults() {
    let config = ServiceConfig::default();

    assert_eq!(config.server.address(), "0.0.0.0:8080");
    assert_eq!(config.server.workers, 4);
    assert!(config.rate_limit.enabled);
    assert!((config.rate_limit.requests_per_second - 1.0).abs() < f64::EPSILON);
    assert_eq!(config.rate_limit.burst, 5);
    assert!(!config.validation.require_items);
    assert!(config.openapi.is_none());
}

#[test]
fn test_empty_file_is_default() {
    assert_eq!(ServiceConfig::parse("").unwrap(), ServiceConfig::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let config = ServiceConfig::parse(
        r#"
openapi = "api.yml"

[server]
port = 9000

[validation]
require_items = true
"#,
    )
    .unwrap();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9000);
    assert!(config.validation.require_items);
    assert_eq!(config.rate_limit.burst, 5);
    assert_eq!(config.openapi.as_deref(), Some(std::path::Path::new("api.yml")));
}

#[test]
fn test_wrong_type_fails_to_parse() {
    assert!(ServiceConfig::parse("[server]\nport = \"eighty\"").is_err());
}

// =============================================================================
// ENVIRONMENT
// =============================================================================

#[test]
fn test_env_overrides() {
    let mut config = ServiceConfig::default();
    config.apply_env(env(&[(PORT_ENV, "3000"), (HOST_ENV, "127.0.0.1"), (WORKERS_ENV, "8")]));

    assert_eq!(config.server.address(), "127.0.0.1:3000");
    assert_eq!(config.server.workers, 8);
}

#[test]
fn test_bad_env_values_are_ignored() {
    let mut config = ServiceConfig::default();
    config.apply_env(env(&[(PORT_ENV, "not-a-port"), (WORKERS_ENV, "-1")]));

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.workers, 4);
}

// =============================================================================
// VALIDATION AND FILES
// =============================================================================

#[test]
fn test_validate_ranges() {
    assert!(ServiceConfig::default().validate().is_ok());

    let mut config = ServiceConfig::default();
    config.server.workers = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    let mut config = ServiceConfig::default();
    config.rate_limit.requests_per_second = 0.0;
    assert!(config.validate().is_err());

    let mut config = ServiceConfig::default();
    config.rate_limit.burst = 0;
    assert!(config.validate().is_err());

    // Ranges do not matter once limiting is off
    config.rate_limit.enabled = false;
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[rate_limit]\nenabled = false\n").unwrap();

    let config = ServiceConfig::from_file(&path).unwrap();
    assert!(!config.rate_limit.enabled);
}

#[test]
fn test_load_explicit_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let err = ServiceConfig::load(Some(&dir.path().join("missing.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_load_rejects_invalid_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    fs::write(&path, "[server\n").unwrap();
    assert!(matches!(ServiceConfig::load(Some(&path)), Err(ConfigError::Parse { .. })));

    fs::write(&path, "[rate_limit]\nburst = 0\n").unwrap();
    assert!(matches!(ServiceConfig::load(Some(&path)), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validation_config_builds_validator() {
    let config = ServiceConfig::parse("[validation]\nrequire_items = true\n").unwrap();
    assert!(config.validation.validator().requires_items());
    assert!(!ServiceConfig::default().validation.validator().requires_items());
}
