//! Application state management

use axum_helpers::Authenticator;
use domain_products::InMemoryProductRepository;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub repository: InMemoryProductRepository,
    pub authenticator: Arc<dyn Authenticator>,
}
