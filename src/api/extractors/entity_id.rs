//! Integer path id extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, OriginalUri, Path},
    http::request::Parts,
};

use crate::errors::AppError;

/// The `:id` segment of an entity route.
///
/// A segment that is not an integer does not name any entity, so it is
/// answered like an unknown route (404) rather than a bad request.
pub struct EntityId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i32>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(EntityId(id)),
            Err(_) => {
                let path = parts
                    .extensions
                    .get::<OriginalUri>()
                    .map(|uri| uri.path().to_string())
                    .unwrap_or_else(|| parts.uri.path().to_string());
                Err(AppError::RouteNotFound(path))
            }
        }
    }
}
