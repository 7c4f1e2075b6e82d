//! HTTP API routes.

pub mod appointments;
pub mod login;
pub mod register;
pub mod status;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::ServerError;

/// Json extractor running [`validator`] checks on the parsed body.
///
/// Both a malformed body and a failed validation end up as a 400.
pub struct Valid<T>(pub T);

impl<S, T> FromRequest<S> for Valid<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ServerError;

    async fn from_request(
        req: Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state).await?;
        body.validate()?;
        Ok(Valid(body))
    }
}

/// Fresh in-memory state for handler tests.
#[cfg(test)]
pub fn state() -> crate::AppState {
    crate::AppState {
        config: std::sync::Arc::new(crate::config::Configuration::default()),
        stores: crate::store::Stores::default(),
    }
}
