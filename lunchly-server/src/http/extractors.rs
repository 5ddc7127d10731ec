//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::AppError;
use crate::models::EntityId;

/// Extract a customer or reservation id from the `{id}` path segment.
///
/// Anything that isn't a positive integer can't name a row, so it is
/// reported as not found rather than as a bad request.
pub struct ValidId<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidId<T>
where
    S: Send + Sync,
    T: EntityId,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound {
                resource: T::RESOURCE,
                id: String::new(),
            })?;

        raw.parse::<T>().map(Self).map_err(|_| AppError::NotFound {
            resource: T::RESOURCE,
            id: raw,
        })
    }
}
