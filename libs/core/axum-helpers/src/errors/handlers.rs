use crate::envelope::ErrorEnvelope;
use axum::{
    http::{StatusCode, Uri},
    response::Response,
};

/// Fallback for unknown routes: `404 {"message": "Route not found", "error": "<path>"}`.
pub async fn not_found(uri: Uri) -> Response {
    ErrorEnvelope::new("Route not found", uri.path()).into_response_with(StatusCode::NOT_FOUND)
}
