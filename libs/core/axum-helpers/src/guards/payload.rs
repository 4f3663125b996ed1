use super::{Guard, GuardContext};
use crate::errors::AppError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use validator::Validate;

/// A request payload that passed [`PayloadGuard`].
///
/// Handlers receive it with `Extension<Validated<T>>`.
#[derive(Debug, Clone)]
pub struct Validated<T>(pub T);

/// Parses the JSON body into `T` and runs its `validator` rules.
///
/// - body is not JSON: `INVALID_JSON`
/// - JSON does not fit `T` (missing or mistyped fields): `VALIDATION_ERROR`
/// - `T::validate` fails: `VALIDATION_ERROR` listing the offending fields
pub struct PayloadGuard<T> {
    _payload: PhantomData<fn() -> T>,
}

impl<T> PayloadGuard<T> {
    pub fn new() -> Self {
        Self {
            _payload: PhantomData,
        }
    }
}

impl<T> Default for PayloadGuard<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for PayloadGuard<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> Guard for PayloadGuard<T>
where
    T: DeserializeOwned + Validate + Clone + Send + Sync + 'static,
{
    fn name(&self) -> &'static str {
        "payload"
    }

    async fn check(&self, ctx: &mut GuardContext) -> Result<(), AppError> {
        let value: serde_json::Value =
            serde_json::from_slice(&ctx.body).map_err(|e| AppError::InvalidJson(e.to_string()))?;

        let payload: T =
            serde_json::from_value(value).map_err(|e| AppError::InvalidPayload(e.to_string()))?;

        payload.validate()?;

        ctx.parts.extensions.insert(Validated(payload));
        Ok(())
    }
}
