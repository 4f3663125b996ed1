use axum::response::{IntoResponse, Response};

use super::{ErrorCode, ErrorResponse, messages};

/// Handler for 404 Not Found errors.
///
/// This can be used as a fallback handler in your router.
pub async fn not_found() -> Response {
    ErrorResponse::new(ErrorCode::NotFound, messages::NOT_FOUND_RESOURCE).into_response()
}

/// Handler for 405 Method Not Allowed errors.
///
/// Register with `Router::method_not_allowed_fallback` after all routes are added.
pub async fn method_not_allowed() -> Response {
    ErrorResponse::new(ErrorCode::MethodNotAllowed, messages::METHOD_NOT_ALLOWED).into_response()
}
