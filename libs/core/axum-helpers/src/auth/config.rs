//! Configuration types for the authentication gate.

use core_config::{ConfigError, FromEnv, env_or_default, env_required};

const MIN_SECRET_LEN: usize = 32;
const DEFAULT_TOKEN_TTL_SECS: i64 = 900;

/// JWT authentication configuration.
///
/// Loaded from environment variables:
/// - `JWT_SECRET` (required) - at least 32 characters
/// - `JWT_TOKEN_TTL_SECS` (optional) - lifetime of issued tokens, default 900
#[derive(Clone, Debug)]
pub struct JwtConfig {
    /// JWT signing secret (minimum 32 characters)
    pub secret: String,
    /// Lifetime of tokens created by `JwtAuth::issue_token`
    pub token_ttl_secs: i64,
}

impl JwtConfig {
    /// Create a new JwtConfig with the given secret.
    ///
    /// # Panics
    /// Panics if the secret is less than 32 characters.
    pub fn new(secret: impl Into<String>) -> Self {
        let secret = secret.into();
        assert!(
            secret.len() >= MIN_SECRET_LEN,
            "JWT secret must be at least 32 characters"
        );
        Self {
            secret,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }
}

impl FromEnv for JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("JWT_SECRET")?;

        if secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::ParseError {
                key: "JWT_SECRET".to_string(),
                details: format!(
                    "must be at least 32 characters (got {}). Generate one with: openssl rand -base64 32",
                    secret.len()
                ),
            });
        }

        let token_ttl_secs = env_or_default("JWT_TOKEN_TTL_SECS", &DEFAULT_TOKEN_TTL_SECS.to_string())
            .parse::<i64>()
            .ok()
            .filter(|ttl| *ttl > 0)
            .ok_or_else(|| ConfigError::ParseError {
                key: "JWT_TOKEN_TTL_SECS".to_string(),
                details: "must be a positive number of seconds".to_string(),
            })?;

        Ok(Self {
            secret,
            token_ttl_secs,
        })
    }
}
