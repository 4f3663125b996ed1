//! Server infrastructure: router assembly, `/health`, graceful shutdown.
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::app_info;
//!
//! let router = create_router::<ApiDoc>(api_routes)?.merge(health_router(app_info!()));
//! create_production_app(router, &config.server, async {}).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{
    OPENAPI_PATH, create_production_app, create_router, create_router_with_cors, normalize_paths,
};
pub use health::{HealthResponse, health_router};
pub use shutdown::ShutdownCoordinator;
