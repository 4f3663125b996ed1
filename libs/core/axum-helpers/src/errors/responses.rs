//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "error": "INTERNAL_ERROR",
        "message": "An internal server error occurred",
        "status_code": 500
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "error": "VALIDATION_ERROR",
        "message": "Request validation failed: name, price",
        "status_code": 400
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "error": "NOT_FOUND",
        "message": "Product 0194f1e2-7c1a-7d2e-9a4b-2b1f6f0c9a11 not found",
        "status_code": 404
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unauthorized - Authentication required",
    content_type = "application/json",
    example = json!({
        "error": "UNAUTHORIZED",
        "message": "No token provided",
        "status_code": 401
    })
)]
pub struct UnauthorizedResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Conflict - Resource already exists",
    content_type = "application/json",
    example = json!({
        "error": "CONFLICT",
        "message": "Product with name 'Desk' already exists",
        "status_code": 409
    })
)]
pub struct ConflictResponse(pub ErrorResponse);
