//! Success envelope shared by all handlers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const STATUS_SUCCESS: &str = "success";

/// Success envelope: `{ "status": "success", "status_code": 200, "data": ... }`.
///
/// The HTTP status of the response always equals `status_code`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Always `"success"`
    pub status: String,
    /// HTTP status code of the response
    pub status_code: u16,
    /// Response payload
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn with_status(status: StatusCode, data: T) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            status_code: status.as_u16(),
            data,
        }
    }

    /// 200 OK
    pub fn ok(data: T) -> Self {
        Self::with_status(StatusCode::OK, data)
    }

    /// 201 Created
    pub fn created(data: T) -> Self {
        Self::with_status(StatusCode::CREATED, data)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}
