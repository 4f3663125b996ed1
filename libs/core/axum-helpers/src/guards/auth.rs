use super::{Guard, GuardContext};
use crate::auth::Authenticator;
use crate::errors::{AppError, messages};
use async_trait::async_trait;
use axum::http::HeaderMap;
use std::sync::Arc;

/// Extract a bearer token from the Authorization header or the `access_token` cookie
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .or_else(|| {
            headers
                .get("cookie")
                .and_then(|v| v.to_str().ok())
                .and_then(|cookies| {
                    cookies.split(';').find_map(|cookie| {
                        let (name, value) = cookie.trim().split_once('=')?;
                        (name == "access_token" && !value.is_empty()).then(|| value.to_string())
                    })
                })
        })
}

/// Rejects requests without valid credentials.
///
/// On success the caller's [`crate::auth::Claims`] are inserted into the
/// request extensions.
#[derive(Clone)]
pub struct AuthGuard {
    authenticator: Arc<dyn Authenticator>,
}

impl AuthGuard {
    pub fn new(authenticator: Arc<dyn Authenticator>) -> Self {
        Self { authenticator }
    }
}

#[async_trait]
impl Guard for AuthGuard {
    fn name(&self) -> &'static str {
        "auth"
    }

    async fn check(&self, ctx: &mut GuardContext) -> Result<(), AppError> {
        let Some(token) = extract_token(&ctx.parts.headers) else {
            tracing::debug!("No token found in Authorization header or cookie");
            return Err(AppError::Unauthorized(messages::NO_TOKEN.to_string()));
        };

        let claims = self.authenticator.authenticate(&token).await.map_err(|e| {
            tracing::debug!("Token verification failed: {}", e);
            AppError::Unauthorized(messages::INVALID_TOKEN.to_string())
        })?;

        tracing::debug!(subject = %claims.sub, "Request authenticated");
        ctx.parts.extensions.insert(claims);
        Ok(())
    }
}
