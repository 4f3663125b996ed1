//! Products API - REST server

use axum_helpers::server::{create_production_app, create_router, health_router};
use axum_helpers::JwtAuth;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_products::{InMemoryProductRepository, ProductRepository};
use std::sync::Arc;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let state = AppState {
        authenticator: Arc::new(JwtAuth::new(&config.jwt)),
        repository: InMemoryProductRepository::new(),
        config,
    };

    info!(
        default_limit = state.config.pagination.default_limit,
        max_limit = ?state.config.pagination.max_limit,
        "Product listing configured"
    );

    let api_routes = api::routes(&state);
    let router = create_router::<openapi::ApiDoc>(api_routes)?;
    let app = router.merge(health_router(state.config.app));

    info!(
        "Starting {} v{} on port {}",
        state.config.app.name, state.config.app.version, state.config.server.port
    );

    let repository = state.repository.clone();
    create_production_app(app, &state.config.server, async move {
        match repository.count().await {
            Ok(count) => info!("Discarding {} in-memory products", count),
            Err(e) => tracing::warn!("Could not count products on shutdown: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
