use crate::errors::{FieldError, Location, ValidationRejection};
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

/// Extractor for a single `{id}` path segment that must be a UUID.
///
/// ```ignore
/// async fn get_category(UuidPath(id): UuidPath) -> Response { ... }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                ValidationRejection::single(FieldError::new("id", Location::Params, e.body_text()))
            })?;

        Uuid::parse_str(&raw).map(UuidPath).map_err(|_| {
            ValidationRejection::single(FieldError::new(
                "id",
                Location::Params,
                format!("Invalid UUID: {raw}"),
            ))
        })
    }
}
