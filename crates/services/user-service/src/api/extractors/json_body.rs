//! JSON body extractor with uniform rejection.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use common::AppError;

/// JSON extractor whose rejection is a plain `400 invalid request body`.
///
/// Field-level checks are left to the service layer.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::warn!(error = %e.body_text(), "Invalid request body");
            AppError::bad_request("invalid request body")
        })?;

        Ok(JsonBody(value))
    }
}
