//! Request routing
//!
//! Maps method and path to the API handlers and turns their results into a
//! status code plus JSON body. Nothing here touches sockets, so routes can
//! be exercised directly in tests.

use std::fmt;
use std::io::Read;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tiny_http::Method;

use crate::api::{self, ApiError, ApiErrorData};
use crate::config::ServiceConfig;
use crate::core::models::Receipt;
use crate::core::ports::ReceiptStore;
use crate::core::services::ReceiptValidator;

use super::rate_limit::RateLimiter;

/// Path for submitting receipts
pub const PROCESS_PATH: &str = "/receipts/process";

/// Path for the health check
pub const HEALTH_PATH: &str = "/health";

/// Largest request body accepted, in bytes
pub const MAX_BODY_BYTES: u64 = 64 * 1024;

/// Everything a request handler needs
pub struct AppState {
    /// Where accepted receipts are kept
    pub store: Arc<dyn ReceiptStore>,
    /// Rules applied to submitted receipts
    pub validator: ReceiptValidator,
    /// Request limiter, `None` when disabled
    pub limiter: Option<RateLimiter>,
}

impl AppState {
    /// Create state around a store, without rate limiting
    #[must_use]
    pub fn new(store: Arc<dyn ReceiptStore>, validator: ReceiptValidator) -> Self {
        Self {
            store,
            validator,
            limiter: None,
        }
    }

    /// Create state for a configured service
    #[must_use]
    pub fn from_config(store: Arc<dyn ReceiptStore>, config: &ServiceConfig) -> Self {
        Self {
            store,
            validator: config.validation.validator(),
            limiter: RateLimiter::from_config(&config.rate_limit),
        }
    }

    /// Replace the rate limiter
    #[must_use]
    pub fn with_limiter(mut self, limiter: RateLimiter) -> Self {
        self.limiter = Some(limiter);
        self
    }

    /// Whether a request to `url` may proceed
    ///
    /// Health checks are never limited.
    pub fn admit(&self, url: &str) -> bool {
        strip_query(url) == HEALTH_PATH || self.limiter.as_ref().is_none_or(RateLimiter::check)
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("receipts", &self.store.len())
            .field("validator", &self.validator)
            .field("limiter", &self.limiter)
            .finish()
    }
}

/// A routed response: HTTP status and JSON body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// HTTP status code
    pub status: u16,
    /// JSON body
    pub body: String,
}

impl Reply {
    /// 200 with `data` as the body
    #[must_use]
    pub fn ok<T: Serialize>(data: &T) -> Self {
        json_reply(data, 200)
    }

    /// Error body with the error's status
    #[must_use]
    pub fn error(error: &ApiError) -> Self {
        json_reply(&ApiErrorData::from(error), error.status_code())
    }

    fn from_result<T: Serialize>(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Self::ok(&data),
            Err(e) => Self::error(&e),
        }
    }
}

// =============================================================================
// REQUEST HANDLING
// =============================================================================

/// Route a request to its handler
pub fn route(state: &AppState, method: &Method, url: &str, body: &mut dyn Read) -> Reply {
    let path = strip_query(url);

    match (method, path) {
        (&Method::Post, PROCESS_PATH) => match read_json_body::<Receipt>(body) {
            Ok(receipt) => Reply::from_result(api::process_receipt(
                state.store.as_ref(),
                &state.validator,
                receipt,
            )),
            Err(e) => Reply::error(&e),
        },
        (&Method::Get, HEALTH_PATH) => Reply::ok(&api::health(state.store.as_ref())),
        (_, PROCESS_PATH | HEALTH_PATH) => method_not_allowed(method, path),

        _ => match points_id(path) {
            Some(id) if *method == Method::Get => {
                Reply::from_result(api::get_points(state.store.as_ref(), id))
            },
            Some(_) => method_not_allowed(method, path),
            None => Reply::error(&ApiError::not_found(format!(
                "API endpoint not found: {method} {path}"
            ))),
        },
    }
}

/// Extract `{id}` from `/receipts/{id}/points`
fn points_id(path: &str) -> Option<&str> {
    path.strip_prefix("/receipts/")
        .and_then(|rest| rest.strip_suffix("/points"))
        .filter(|id| !id.contains('/'))
}

fn strip_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(path, _)| path)
}

fn method_not_allowed(method: &Method, path: &str) -> Reply {
    Reply::error(&ApiError::method_not_allowed(format!(
        "Method {method} not allowed for {path}"
    )))
}

// =============================================================================
// BODY PARSING
// =============================================================================

/// Read and parse a JSON body
///
/// At most [`MAX_BODY_BYTES`] are read; a longer body is rejected with 413.
fn read_json_body<T: DeserializeOwned>(body: &mut dyn Read) -> Result<T, ApiError> {
    let mut content = Vec::new();
    Read::take(body, MAX_BODY_BYTES + 1)
        .read_to_end(&mut content)
        .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {e}")))?;

    if content.len() as u64 > MAX_BODY_BYTES {
        return Err(ApiError::payload_too_large(format!(
            "Request body exceeds {MAX_BODY_BYTES} bytes"
        )));
    }

    serde_json::from_slice(&content)
        .map_err(|e| ApiError::bad_request(format!("The receipt is invalid: {e}")))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

fn json_reply<T: Serialize + ?Sized>(data: &T, status: u16) -> Reply {
    serde_json::to_string(data).map_or_else(
        |_| Reply {
            status: 500,
            body: r#"{"code":"INTERNAL_ERROR","message":"Failed to encode response"}"#.to_string(),
        },
        |body| Reply { status, body },
    )
}
