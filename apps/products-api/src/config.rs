//! Configuration for Products API

use axum_helpers::JwtConfig;
use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use domain_products::PaginationConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub jwt: JwtConfig,
    pub pagination: PaginationConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let jwt = JwtConfig::from_env()?;
        let pagination = PaginationConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            jwt,
            pagination,
        })
    }
}
