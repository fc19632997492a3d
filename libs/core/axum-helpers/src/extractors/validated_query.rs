//! Query string extractor with validation using the validator crate.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query extractor that deserializes then validates.
///
/// Malformed values (e.g. `page=abc`) reject with `INVALID_QUERY`; values
/// that parse but break a constraint (e.g. `limit=500`) reject with
/// `VALIDATION_ERROR` and per-field details. Both are 400s.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ValidatedQuery;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct Paging {
///     #[validate(range(min = 1))]
///     page: u64,
/// }
///
/// async fn list(ValidatedQuery(paging): ValidatedQuery<Paging>) -> String {
///     format!("page {}", paging.page)
/// }
/// ```
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        value.validate()?;
        Ok(ValidatedQuery(value))
    }
}
