//! Standard error messages for consistent error responses.

pub const VALIDATION_FAILED: &str = "Request validation failed";
pub const INVALID_JSON: &str = "Request body must be valid JSON";
pub const METHOD_NOT_ALLOWED: &str = "The HTTP method is not allowed for this resource";
pub const NOT_FOUND_RESOURCE: &str = "The requested resource was not found";
pub const INTERNAL_ERROR: &str = "An internal server error occurred";
pub const NO_TOKEN: &str = "No token provided";
pub const INVALID_TOKEN: &str = "Invalid token";
pub const BODY_UNREADABLE: &str = "Request body could not be read";
