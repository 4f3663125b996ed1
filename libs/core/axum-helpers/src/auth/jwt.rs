use super::config::JwtConfig;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity attached to an authenticated request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user ID)
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub exp: i64, // Expiration time
    pub iat: i64, // Issued at
    pub jti: String,
}

/// Verifies caller credentials.
///
/// Implementations decide what a token is; guards only need a verdict.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, token: &str) -> eyre::Result<Claims>;
}

/// Stateless HS256 JWT authentication.
#[derive(Clone)]
pub struct JwtAuth {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_ttl_secs: i64,
}

impl JwtAuth {
    pub fn new(config: &JwtConfig) -> Self {
        tracing::info!("JWT auth initialized");
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
            token_ttl_secs: config.token_ttl_secs,
        }
    }

    /// Create a signed token for `user_id` valid for the configured TTL.
    pub fn issue_token(&self, user_id: &str, email: &str, roles: &[String]) -> eyre::Result<String> {
        self.issue_token_with_ttl(user_id, email, roles, self.token_ttl_secs)
    }

    /// Create a signed token with an explicit TTL in seconds (may be negative).
    pub fn issue_token_with_ttl(
        &self,
        user_id: &str,
        email: &str,
        roles: &[String],
        ttl_seconds: i64,
    ) -> eyre::Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            roles: roles.to_vec(),
            exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Verify JWT token signature and expiry, returning the decoded claims
    pub fn verify_token(&self, token: &str) -> eyre::Result<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(token_data.claims)
    }
}

#[async_trait]
impl Authenticator for JwtAuth {
    async fn authenticate(&self, token: &str) -> eyre::Result<Claims> {
        self.verify_token(token)
    }
}
