//! Ordered request guards.
//!
//! A [`GuardChain`] is an explicit list of [`Guard`] steps evaluated in the
//! order they were added. The first failing guard short-circuits the request
//! with its error envelope; the handler only runs once every guard has let
//! the request through.
//!
//! ```ignore
//! use axum::{middleware::from_fn_with_state, routing::post};
//! use axum_helpers::guards::{AuthGuard, GuardChain, PayloadGuard, run_guards};
//!
//! let chain = GuardChain::new()
//!     .then(PayloadGuard::<CreateProduct>::new())
//!     .then(AuthGuard::new(authenticator));
//!
//! let route = post(create_product).route_layer(from_fn_with_state(chain, run_guards));
//! ```

pub mod auth;
pub mod payload;

pub use auth::AuthGuard;
pub use payload::{PayloadGuard, Validated};

use crate::errors::{AppError, messages};
use async_trait::async_trait;
use axum::{
    body::{Body, Bytes},
    extract::{Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// Largest request body a guard chain will buffer.
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Request view handed to each guard.
///
/// Guards may read headers and the buffered body, and may insert typed
/// values into `parts.extensions` for later guards and the handler.
pub struct GuardContext {
    pub parts: Parts,
    pub body: Bytes,
}

impl GuardContext {
    pub fn new(parts: Parts, body: Bytes) -> Self {
        Self { parts, body }
    }

    pub fn into_request(self) -> Request {
        Request::from_parts(self.parts, Body::from(self.body))
    }
}

/// A single continue-or-fail step.
#[async_trait]
pub trait Guard: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// `Ok(())` lets the request continue; `Err` ends it.
    async fn check(&self, ctx: &mut GuardContext) -> Result<(), AppError>;
}

/// Ordered list of guards, cheap to clone.
#[derive(Clone)]
pub struct GuardChain {
    guards: Vec<Arc<dyn Guard>>,
    body_limit: usize,
}

impl GuardChain {
    pub fn new() -> Self {
        Self {
            guards: Vec::new(),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }

    /// Append a guard; it runs after every guard added before it.
    pub fn then<G: Guard + 'static>(mut self, guard: G) -> Self {
        self.guards.push(Arc::new(guard));
        self
    }

    pub fn with_body_limit(mut self, limit: usize) -> Self {
        self.body_limit = limit;
        self
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.guards.iter().map(|g| g.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.guards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }

    /// Evaluate guards in order, stopping at the first failure.
    pub async fn run(&self, ctx: &mut GuardContext) -> Result<(), AppError> {
        for guard in &self.guards {
            if let Err(err) = guard.check(ctx).await {
                tracing::debug!(guard = guard.name(), error = %err, "Guard rejected request");
                return Err(err);
            }
            tracing::trace!(guard = guard.name(), "Guard passed");
        }
        Ok(())
    }
}

impl Default for GuardChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Middleware running a [`GuardChain`] in front of a handler.
///
/// Use with `axum::middleware::from_fn_with_state(chain, run_guards)`.
pub async fn run_guards(State(chain): State<GuardChain>, request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();

    let body = match axum::body::to_bytes(body, chain.body_limit).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!("Failed to buffer request body: {}", e);
            return AppError::BadRequest(messages::BODY_UNREADABLE.to_string()).into_response();
        }
    };

    let mut ctx = GuardContext::new(parts, body);
    if let Err(err) = chain.run(&mut ctx).await {
        return err.into_response();
    }

    next.run(ctx.into_request()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        http::{Request as HttpRequest, StatusCode},
        middleware::from_fn_with_state,
        routing::get,
    };
    use std::sync::Mutex;
    use tower::ServiceExt;

    struct Recording {
        name: &'static str,
        log: Arc<Mutex<Vec<&'static str>>>,
        fail: bool,
    }

    #[async_trait]
    impl Guard for Recording {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn check(&self, _ctx: &mut GuardContext) -> Result<(), AppError> {
            self.log.lock().unwrap().push(self.name);
            if self.fail {
                Err(AppError::Unauthorized(self.name.to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn recording(name: &'static str, log: &Arc<Mutex<Vec<&'static str>>>, fail: bool) -> Recording {
        Recording {
            name,
            log: Arc::clone(log),
            fail,
        }
    }

    fn empty_context() -> GuardContext {
        let (parts, _) = HttpRequest::builder().uri("/").body(()).unwrap().into_parts();
        GuardContext::new(parts, Bytes::new())
    }

    #[tokio::test]
    async fn test_guards_run_in_insertion_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let chain = GuardChain::new()
            .then(recording("first", &log, false))
            .then(recording("second", &log, false))
            .then(recording("third", &log, false));

        assert_eq!(chain.names(), vec!["first", "second", "third"]);
        chain.run(&mut empty_context()).await.unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_first_failure_short_circuits() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let chain = GuardChain::new()
            .then(recording("first", &log, false))
            .then(recording("second", &log, true))
            .then(recording("third", &log, false));

        let err = chain.run(&mut empty_context()).await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(ref name) if name == "second"));
        assert_eq!(*log.lock().unwrap(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_empty_chain_passes() {
        let chain = GuardChain::default();
        assert!(chain.is_empty());
        assert!(chain.run(&mut empty_context()).await.is_ok());
    }

    #[tokio::test]
    async fn test_middleware_blocks_handler_on_failure() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let chain = GuardChain::new().then(recording("deny", &log, true));
        let app = Router::new().route(
            "/",
            get(|| async { "reached" }).route_layer(from_fn_with_state(chain, run_guards)),
        );

        let response = app
            .oneshot(HttpRequest::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_middleware_preserves_body_for_handler() {
        let chain = GuardChain::new();
        let app = Router::new().route(
            "/",
            axum::routing::post(|body: String| async move { body })
                .route_layer(from_fn_with_state(chain, run_guards)),
        );

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .method("POST")
                    .uri("/")
                    .body(Body::from("payload"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"payload");
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        let chain = GuardChain::new().with_body_limit(4);
        let app = Router::new().route(
            "/",
            axum::routing::post(|| async { "reached" })
                .route_layer(from_fn_with_state(chain, run_guards)),
        );

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .method("POST")
                    .uri("/")
                    .body(Body::from("far too long"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
