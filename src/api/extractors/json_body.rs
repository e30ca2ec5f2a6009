//! JSON body extractor - deserialization failures become `AppError`s.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::AppError;

/// JSON extractor whose rejection renders as the standard error body.
///
/// Malformed JSON, a wrong content type, a body that is not a JSON object or
/// a field of the wrong type is a bad request. Missing fields are left to the
/// services, which report them as validation errors.
///
/// # Example
///
/// ```rust,ignore
/// async fn create_author(JsonBody(payload): JsonBody<CreateAuthor>) {
///     // payload.name may still be None here
/// }
/// ```
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        // Struct payloads would otherwise also accept a positional array
        if !value.is_object() {
            return Err(AppError::bad_request("Request body must be a JSON object"));
        }

        let payload =
            serde_json::from_value(value).map_err(|e| AppError::bad_request(e.to_string()))?;

        Ok(JsonBody(payload))
    }
}
