use crate::errors::{FieldError, Location, ValidationRejection};
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize)]
struct RawPageQuery {
    page: Option<String>,
    limit: Option<String>,
}

/// Optional `?page=&limit=` query values.
///
/// A value that is present must be an integer of at least 1. Missing values stay
/// `None`; the caller decides the defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number, defaults to 1
    #[param(minimum = 1)]
    pub page: Option<u64>,
    /// Page size, defaults to 25
    #[param(minimum = 1)]
    pub limit: Option<u64>,
}

fn parse_positive(name: &str, raw: Option<String>) -> Result<Option<u64>, FieldError> {
    match raw {
        None => Ok(None),
        Some(value) => match value.trim().parse::<u64>() {
            Ok(n) if n >= 1 => Ok(Some(n)),
            _ => Err(FieldError::new(
                name,
                Location::Query,
                format!("{name} must be an integer greater than or equal to 1"),
            )),
        },
    }
}

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<RawPageQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                ValidationRejection::single(FieldError {
                    field: None,
                    location: Location::Query,
                    message: e.body_text(),
                })
            })?;

        let page = parse_positive("page", raw.page);
        let limit = parse_positive("limit", raw.limit);

        match (page, limit) {
            (Ok(page), Ok(limit)) => Ok(PageQuery { page, limit }),
            (page, limit) => Err(ValidationRejection(
                [page.err(), limit.err()].into_iter().flatten().collect(),
            )),
        }
    }
}
