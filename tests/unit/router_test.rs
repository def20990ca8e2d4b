//! Tests for request routing

use std::io::Cursor;
use std::sync::Arc;

use receipt_processor::adapters::InMemoryReceiptStore;
use receipt_processor::core::services::ReceiptValidator;
use receipt_processor::server::{AppState, MAX_BODY_BYTES, RateLimiter, Reply, route};
use serde_json::Value;
use tiny_http::Method;

use crate::common::WALGREENS_JSON;

fn state() -> AppState {
    AppState::new(Arc::new(InMemoryReceiptStore::new()), ReceiptValidator::default())
}

fn send(state: &AppState, method: Method, url: &str, body: &str) -> (u16, Value) {
    let Reply { status, body } = route(state, &method, url, &mut Cursor::new(body.as_bytes()));
    (status, serde_json::from_str(&body).unwrap())
}

// =============================================================================
// RECEIPT FLOW
// =============================================================================

#[test]
fn test_process_then_points() {
    let state = state();

    let (status, body) = send(&state, Method::Post, "/receipts/process", WALGREENS_JSON);
    assert_eq!(status, 200);
    let id = body["id"].as_str().unwrap().to_string();

    let (status, body) = send(&state, Method::Get, &format!("/receipts/{id}/points"), "");
    assert_eq!(status, 200);
    assert_eq!(body["points"], 15);
}

#[test]
fn test_invalid_json_is_bad_request() {
    let (status, body) = send(&state(), Method::Post, "/receipts/process", "{not json");

    assert_eq!(status, 400);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[test]
fn test_missing_field_is_bad_request() {
    let body = r#"{"retailer": "Target", "purchaseDate": "2022-01-01", "items": [], "total": "0.00"}"#;
    let (status, body) = send(&state(), Method::Post, "/receipts/process", body);

    assert_eq!(status, 400);
    assert!(body["message"].as_str().unwrap().contains("purchaseTime"));
}

#[test]
fn test_failed_validation_is_bad_request() {
    let body = WALGREENS_JSON.replace("\"2.65\"", "\"2.60\"");
    let (status, body) = send(&state(), Method::Post, "/receipts/process", &body);

    assert_eq!(status, 400);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["message"].as_str().unwrap().contains("2.60"));
}

#[test]
fn test_unknown_receipt_is_not_found() {
    let url = "/receipts/7fb1377b-b223-49d9-a31a-5a02701dd310/points";
    let (status, body) = send(&state(), Method::Get, url, "");

    assert_eq!(status, 404);
    assert_eq!(body["code"], "NOT_FOUND");
}

// =============================================================================
// ROUTING
// =============================================================================

#[test]
fn test_health() {
    let (status, body) = send(&state(), Method::Get, "/health?probe=1", "");

    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["receipts"], 0);
}

#[test]
fn test_unknown_path_is_not_found() {
    let (status, body) = send(&state(), Method::Get, "/receipts", "");

    assert_eq!(status, 404);
    assert!(body["message"].as_str().unwrap().contains("/receipts"));
}

#[test]
fn test_wrong_method_is_not_allowed() {
    let state = state();

    for (method, url) in [
        (Method::Get, "/receipts/process"),
        (Method::Post, "/health"),
        (Method::Delete, "/receipts/abc/points"),
    ] {
        let (status, body) = send(&state, method, url, "");
        assert_eq!(status, 405, "{url}");
        assert_eq!(body["code"], "METHOD_NOT_ALLOWED");
    }
}

// =============================================================================
// RATE LIMITING
// =============================================================================

#[test]
fn test_admit_spends_tokens_except_for_health() {
    let state = state().with_limiter(RateLimiter::new(0.001, 2));

    assert!(state.admit("/receipts/process"));
    assert!(state.admit("/receipts/abc/points"));
    assert!(!state.admit("/receipts/process"));
    assert!(state.admit("/health"));
    assert!(state.admit("/health?x=1"));
}

#[test]
fn test_admit_without_limiter() {
    let state = state();
    for _ in 0..100 {
        assert!(state.admit("/receipts/process"));
    }
}

// =============================================================================
// BODY LIMIT
// =============================================================================

#[test]
fn test_oversized_body_is_rejected() {
    let state = state();
    let body = format!("{WALGREENS_JSON}{}", " ".repeat(MAX_BODY_BYTES as usize));

    let (status, body) = send(&state, Method::Post, "/receipts/process", &body);

    assert_eq!(status, 413);
    assert_eq!(body["code"], "PAYLOAD_TOO_LARGE");
    assert_eq!(state.store.len(), 0);
}

#[test]
fn test_body_at_limit_is_accepted() {
    let padding = MAX_BODY_BYTES as usize - WALGREENS_JSON.len();
    let body = format!("{WALGREENS_JSON}{}", " ".repeat(padding));

    let (status, _) = send(&state(), Method::Post, "/receipts/process", &body);
    assert_eq!(status, 200);
}
