//! Type-safe error codes for API responses.
//!
//! Each error code includes:
//! - String representation placed in the `error` field of the failure envelope
//! - Integer code attached to log events for monitoring
//! - The HTTP status it maps to
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.status().as_u16(), 400);
//! ```

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request payload failed validation rules or misses required fields
    ValidationError,

    /// Request body is not valid JSON
    InvalidJson,

    /// Request is malformed in a way not covered by validation
    BadRequest,

    /// Requested resource was not found
    NotFound,

    /// Route exists but does not accept the request method
    MethodNotAllowed,

    /// Authentication credentials are missing or invalid
    Unauthorized,

    /// Request conflicts with current resource state (e.g., duplicate resource)
    Conflict,

    // Server errors (5000-5999)
    /// An unexpected internal server error occurred
    InternalError,
}

impl ErrorCode {
    /// Get the string representation for client consumption.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidJson => "INVALID_JSON",
            Self::BadRequest => "BAD_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Conflict => "CONFLICT",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Get the integer code for logging and monitoring.
    ///
    /// - 1000-1999: Client errors
    /// - 5000-5999: Server errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidJson => 1002,
            Self::BadRequest => 1003,
            Self::NotFound => 1004,
            Self::MethodNotAllowed => 1005,
            Self::Unauthorized => 1006,
            Self::Conflict => 1008,
            Self::InternalError => 5001,
        }
    }

    /// HTTP status code carried by responses with this error code.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ValidationError | Self::InvalidJson | Self::BadRequest => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Conflict => StatusCode::CONFLICT,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
