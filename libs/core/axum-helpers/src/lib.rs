//! # Axum Helpers
//!
//! Shared HTTP plumbing for the catalog services.
//!
//! ## Modules
//!
//! - **[`auth`]**: stateless JWT authentication behind the [`Authenticator`] trait
//! - **[`guards`]**: ordered request guards (payload validation, auth) run before handlers
//! - **[`errors`]**: the `{error, message, status_code}` envelope and [`AppError`]
//! - **[`response`]**: the `{status, status_code, data}` success envelope
//! - **[`server`]**: router assembly, health checks, graceful shutdown
//! - **[`http`]**: CORS and security headers
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> eyre::Result<()> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(api_routes)?;
//!
//!     create_production_app(router, &ServerConfig::default(), async {}).await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod errors;
pub mod guards;
pub mod http;
pub mod response;
pub mod server;

pub use auth::{Authenticator, Claims, JwtAuth, JwtConfig};

pub use guards::{AuthGuard, Guard, GuardChain, GuardContext, PayloadGuard, Validated, run_guards};

pub use server::{
    HealthResponse, ShutdownCoordinator, create_production_app, create_router, health_router,
    normalize_paths,
};

pub use http::{create_cors_layer, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use response::ApiResponse;
