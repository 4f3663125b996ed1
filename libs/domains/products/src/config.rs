//! Pagination settings for product listing.

use core_config::{ConfigError, FromEnv, env_or_default, env_parse_optional};

pub const DEFAULT_LIMIT: u64 = 10;

/// Listing limits.
///
/// - `PRODUCTS_DEFAULT_LIMIT` (optional) - page size when the query has none, default 10
/// - `PRODUCTS_MAX_LIMIT` (optional) - larger requested limits are clamped to it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationConfig {
    pub default_limit: u64,
    pub max_limit: Option<u64>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            max_limit: None,
        }
    }
}

impl PaginationConfig {
    pub fn with_max_limit(mut self, max_limit: u64) -> Self {
        self.max_limit = Some(max_limit);
        self
    }
}

fn positive(key: &str, value: u64) -> Result<u64, ConfigError> {
    if value == 0 {
        return Err(ConfigError::ParseError {
            key: key.to_string(),
            details: "must be at least 1".to_string(),
        });
    }
    Ok(value)
}

impl FromEnv for PaginationConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let default_limit = env_or_default("PRODUCTS_DEFAULT_LIMIT", &DEFAULT_LIMIT.to_string())
            .parse::<u64>()
            .map_err(|e| ConfigError::ParseError {
                key: "PRODUCTS_DEFAULT_LIMIT".to_string(),
                details: e.to_string(),
            })
            .and_then(|v| positive("PRODUCTS_DEFAULT_LIMIT", v))?;

        let max_limit = env_parse_optional::<u64>("PRODUCTS_MAX_LIMIT")?
            .map(|v| positive("PRODUCTS_MAX_LIMIT", v))
            .transpose()?;

        if let Some(max) = max_limit.filter(|max| default_limit > *max) {
            return Err(ConfigError::ParseError {
                key: "PRODUCTS_DEFAULT_LIMIT".to_string(),
                details: format!("must not exceed PRODUCTS_MAX_LIMIT ({})", max),
            });
        }

        Ok(Self {
            default_limit,
            max_limit,
        })
    }
}
