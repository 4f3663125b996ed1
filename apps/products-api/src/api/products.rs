//! Products API routes

use axum::Router;
use domain_products::{ProductService, handlers};
use std::sync::Arc;

use crate::state::AppState;

/// Create products router
pub fn router(state: &AppState) -> Router {
    let service = ProductService::new(state.repository.clone())
        .with_pagination(state.config.pagination);
    handlers::router(service, Arc::clone(&state.authenticator))
}
