pub mod codes;
pub mod handlers;
pub mod messages;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Failure envelope returned for every error response.
///
/// - `error`: machine-readable error identifier (e.g. "CONFLICT")
/// - `message`: human-readable message
/// - `status_code`: the HTTP status, repeated in the body
///
/// ```json
/// {
///   "error": "CONFLICT",
///   "message": "Product with name 'Desk' already exists",
///   "status_code": 409
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// HTTP status code of the response
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            error: code.as_str().to_string(),
            message: message.into(),
            status_code: code.status().as_u16(),
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = axum::http::StatusCode::from_u16(self.status_code)
            .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    /// Error code this error renders with.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::ValidationError(_) | AppError::InvalidPayload(_) => {
                ErrorCode::ValidationError
            }
            AppError::InvalidJson(_) => ErrorCode::InvalidJson,
            AppError::BadRequest(_) => ErrorCode::BadRequest,
            AppError::Unauthorized(_) => ErrorCode::Unauthorized,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::Conflict(_) => ErrorCode::Conflict,
            AppError::InternalServerError(_) => ErrorCode::InternalError,
        }
    }

    /// Builds the failure envelope, logging at a level matching the severity.
    pub fn to_error_response(&self) -> ErrorResponse {
        let code = self.code();
        let message = match self {
            AppError::ValidationError(e) => {
                let fields = invalid_fields(e);
                tracing::info!(error_code = code.code(), fields = ?fields, "Validation error");
                format!("{}: {}", messages::VALIDATION_FAILED, fields.join(", "))
            }
            AppError::InvalidPayload(detail) => {
                tracing::info!(error_code = code.code(), "Invalid payload: {}", detail);
                format!("{}: {}", messages::VALIDATION_FAILED, detail)
            }
            AppError::InvalidJson(detail) => {
                tracing::info!(error_code = code.code(), "Invalid JSON body: {}", detail);
                messages::INVALID_JSON.to_string()
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = code.code(), "Bad request: {}", msg);
                msg.clone()
            }
            AppError::Unauthorized(msg) => {
                tracing::info!(error_code = code.code(), "Unauthorized: {}", msg);
                msg.clone()
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = code.code(), "Not found: {}", msg);
                msg.clone()
            }
            AppError::Conflict(msg) => {
                tracing::info!(error_code = code.code(), "Conflict: {}", msg);
                msg.clone()
            }
            AppError::InternalServerError(detail) => {
                tracing::error!(
                    error_code = code.code(),
                    "Internal server error: {}",
                    detail
                );
                messages::INTERNAL_ERROR.to_string()
            }
        };

        ErrorResponse::new(code, message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_error_response().into_response()
    }
}

/// Sorted names of the fields that failed validation.
fn invalid_fields(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<String> = errors.errors().keys().map(|k| k.to_string()).collect();
    fields.sort();
    fields
}
