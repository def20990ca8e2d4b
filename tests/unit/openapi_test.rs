//! Tests for OpenAPI document loading

use std::fs;

use receipt_processor::openapi::{self, OpenApiError};
use tempfile::TempDir;

#[test]
fn test_bundled_document() {
    let doc = openapi::bundled().unwrap();

    assert_eq!(doc.info.title, "Receipt Processor");
    assert_eq!(doc.info.version, "1.0.0");
    assert_eq!(doc.banner(), "Receipt Processor 1.0.0 - A simple receipt processor");
    assert_eq!(
        doc.operations(),
        ["GET /health", "POST /receipts/process", "GET /receipts/{id}/points"]
    );
}

#[test]
fn test_json_document_parses() {
    let doc = openapi::parse(
        r#"{"openapi": "3.1.0", "info": {"title": "T", "version": "2"}, "paths": {}}"#,
    )
    .unwrap();

    assert_eq!(doc.banner(), "T 2");
    assert!(doc.operations().is_empty());
}

#[test]
fn test_swagger_2_is_rejected() {
    let err = openapi::parse("openapi: '2.0'\ninfo:\n  title: T\n  version: '1'\n").unwrap_err();
    assert!(matches!(err, OpenApiError::UnsupportedVersion(v) if v == "2.0"));
}

#[test]
fn test_missing_info_is_parse_error() {
    let err = openapi::parse("openapi: 3.0.0\n").unwrap_err();
    assert!(matches!(err, OpenApiError::Parse(_)));
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("api.yml");
    fs::write(&path, openapi::BUNDLED).unwrap();

    assert_eq!(openapi::load(&path).unwrap(), openapi::bundled().unwrap());
    assert!(matches!(
        openapi::load(&dir.path().join("nope.yml")),
        Err(OpenApiError::Read { .. })
    ));
}

#[test]
fn test_path_level_keys_are_not_operations() {
    let doc = openapi::parse(
        r"
openapi: 3.0.3
info:
  title: T
  version: '1'
paths:
  /receipts/{id}/points:
    summary: Points for one receipt
    parameters:
      - name: id
        in: path
        required: true
    servers:
      - url: http://localhost:8080
    get:
      responses:
        200:
          description: ok
",
    )
    .unwrap();

    assert_eq!(doc.operations(), ["GET /receipts/{id}/points"]);
}
