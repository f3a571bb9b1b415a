//! JSON extractor with automatic validation using the validator crate.

use crate::errors::{FieldError, Location, ValidationRejection};
use axum::extract::{FromRequest, Json, Request};
use serde::de::{Deserialize, DeserializeOwned, Deserializer};
use validator::Validate;

/// JSON body that has passed `Validate::validate`.
///
/// Malformed or mistyped bodies and rule violations both become a
/// [`ValidationRejection`].
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct CreateCategory {
///     #[validate(length(min = 1))]
///     name: String,
/// }
///
/// async fn create(ValidatedJson(input): ValidatedJson<CreateCategory>) -> Response { ... }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ValidationRejection::single(FieldError::body(e.body_text())))?;

        data.validate()
            .map_err(|e| ValidationRejection::from_validation_errors(&e, Location::Body))?;

        Ok(ValidatedJson(data))
    }
}

/// `deserialize_with` target for optional fields that may be omitted but not sent as `null`.
///
/// Pair it with `#[serde(default)]` so an absent field still becomes `None`.
pub fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::post,
    };
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use serde_json::Value;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Payload {
        #[serde(default)]
        #[validate(length(min = 1, message = "title is required"))]
        title: String,
    }

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "non_null")]
        note: Option<String>,
    }

    fn app() -> Router {
        Router::new().route(
            "/",
            post(|ValidatedJson(p): ValidatedJson<Payload>| async move { p.title }),
        )
    }

    async fn send(body: &str) -> (StatusCode, Vec<u8>) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_valid_body_passes() {
        let (status, body) = send(r#"{"title":"Read"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"Read");
    }

    #[tokio::test]
    async fn test_missing_field_is_validation_error() {
        let (status, body) = send("{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Validation error");
        assert_eq!(json["error"][0]["field"], "title");
        assert_eq!(json["error"][0]["message"], "title is required");
    }

    #[tokio::test]
    async fn test_malformed_json_is_validation_error() {
        let (status, body) = send("{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Validation error");
        assert_eq!(json["error"][0]["location"], "body");
        assert!(json["error"][0].get("field").is_none());
    }

    #[test]
    fn test_non_null_distinguishes_absent_from_null() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        assert!(absent.note.is_none());

        let present: Patch = serde_json::from_str(r#"{"note":"x"}"#).unwrap();
        assert_eq!(present.note.as_deref(), Some("x"));

        assert!(serde_json::from_str::<Patch>(r#"{"note":null}"#).is_err());
    }
}
