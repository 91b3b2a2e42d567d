//! # Custom Extractors
//!
//! Maps axum's query rejections onto [`AppError`] so malformed query
//! strings get the same JSON error body as every other failure.

use axum::extract::rejection::QueryRejection;
use axum::extract::Query;

use crate::error::AppError;

/// Extract query parameters, mapping deserialization errors to
/// [`AppError::Validation`].
///
/// ```ignore
/// async fn handler(query: Result<Query<T>, QueryRejection>) -> Result<..., AppError> {
///     let params = extract_query(query)?;
/// }
/// ```
pub fn extract_query<T>(result: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    result
        .map(|Query(v)| v)
        .map_err(|err| AppError::Validation(err.body_text()))
}
