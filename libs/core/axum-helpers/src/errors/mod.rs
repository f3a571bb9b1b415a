//! Validation failures and fallback responses.

pub mod handlers;

use crate::envelope::ErrorEnvelope;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{ValidationErrors, ValidationErrorsKind};

pub const VALIDATION_MESSAGE: &str = "Validation error";

/// Where a rejected value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Body,
    Params,
    Query,
}

/// One rejected input value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Field name, absent when the whole body could not be read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub location: Location,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, location: Location, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            location,
            message: message.into(),
        }
    }

    pub fn body(message: impl Into<String>) -> Self {
        Self {
            field: None,
            location: Location::Body,
            message: message.into(),
        }
    }
}

/// Rejection produced by the validating extractors.
///
/// Renders as `400 {"message": "Validation error", "error": [FieldError, ...]}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRejection(pub Vec<FieldError>);

impl ValidationRejection {
    pub fn single(error: FieldError) -> Self {
        Self(vec![error])
    }

    /// Flattens `validator` errors, including nested structs, into field errors.
    pub fn from_validation_errors(errors: &ValidationErrors, location: Location) -> Self {
        let mut fields = Vec::new();
        collect(errors, None, location, &mut fields);
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        Self(fields)
    }
}

fn collect(
    errors: &ValidationErrors,
    prefix: Option<&str>,
    location: Location,
    out: &mut Vec<FieldError>,
) {
    for (field, kind) in errors.errors() {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{field}"),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(field_errors.iter().map(|err| {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("invalid value ({})", err.code));
                    FieldError::new(path.clone(), location, message)
                }));
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, Some(&path), location, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(nested, Some(&format!("{path}[{index}]")), location, out);
                }
            }
        }
    }
}

impl IntoResponse for ValidationRejection {
    fn into_response(self) -> Response {
        let details = serde_json::to_value(&self.0).unwrap_or_default();
        ErrorEnvelope::new(VALIDATION_MESSAGE, details).into_response_with(StatusCode::BAD_REQUEST)
    }
}
