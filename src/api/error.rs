//! API error types with HTTP status code mapping

use serde::Serialize;

use crate::core::ReceiptError;

/// Error codes that map to HTTP status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid request (400)
    BadRequest,
    /// Resource not found (404)
    NotFound,
    /// Known path, wrong method (405)
    MethodNotAllowed,
    /// Request body too large (413)
    PayloadTooLarge,
    /// Rate limit exceeded (429)
    TooManyRequests,
    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::PayloadTooLarge => 413,
            Self::TooManyRequests => 429,
            Self::Internal => 500,
        }
    }

    /// Get the error code string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::TooManyRequests => "TOO_MANY_REQUESTS",
            Self::Internal => "INTERNAL_ERROR",
        }
    }
}

/// API error with code and message
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Error code (determines HTTP status)
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    /// Create a bad request error
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::BadRequest,
            message: message.into(),
        }
    }

    /// Create a not found error
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::NotFound,
            message: message.into(),
        }
    }

    /// Create a method not allowed error
    #[must_use]
    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::MethodNotAllowed,
            message: message.into(),
        }
    }

    /// Create a payload too large error
    #[must_use]
    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::PayloadTooLarge,
            message: message.into(),
        }
    }

    /// Create a rate limit error
    #[must_use]
    pub fn too_many_requests(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::TooManyRequests,
            message: message.into(),
        }
    }

    /// Create an internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Internal,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.code.status_code()
    }
}

impl From<ReceiptError> for ApiError {
    fn from(err: ReceiptError) -> Self {
        match err {
            ReceiptError::NotFound(_) => Self::not_found("No receipt found for that id"),
            ReceiptError::FieldValidation(_)
            | ReceiptError::TotalMismatch { .. }
            | ReceiptError::MalformedMoney { .. }
            | ReceiptError::OutOfRange { .. } => {
                Self::bad_request(format!("The receipt is invalid: {err}"))
            },
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for ApiError {}

/// Serializable error data for JSON responses
#[derive(Debug, Serialize)]
pub struct ApiErrorData {
    /// Error code string
    pub code: String,
    /// Human-readable message
    pub message: String,
}

impl From<&ApiError> for ApiErrorData {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.code.as_str().to_string(),
            message: err.message.clone(),
        }
    }
}
