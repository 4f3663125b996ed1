//! Authentication gate.
//!
//! - [`Authenticator`]: verifies a bearer credential and yields [`Claims`]
//! - [`JwtAuth`]: HS256 JWT implementation of the gate
//! - [`JwtConfig`]: environment-driven configuration
//!
//! Requests are checked by [`crate::guards::AuthGuard`], which plugs an
//! `Authenticator` into a guard chain.

pub mod config;
pub mod jwt;

pub use config::JwtConfig;
pub use jwt::{Authenticator, Claims, JwtAuth};
