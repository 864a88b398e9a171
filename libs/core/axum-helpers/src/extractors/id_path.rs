//! Integer path parameter extractor.

use crate::errors::{ErrorCode, ErrorResponse};
use axum::{
    Json,
    extract::{FromRequestParts, Path},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};

/// Extractor for a single integer `{id}` path parameter.
///
/// Rejects non-numeric ids with a `400 INVALID_ID` envelope instead of axum's
/// plain-text path rejection.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_lesson(IdPath(id): IdPath) -> String {
///     format!("Lesson ID: {}", id)
/// }
///
/// let app = Router::new().route("/lessons/{id}", get(get_lesson));
/// ```
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        raw.parse::<i64>().map(IdPath).map_err(|_| {
            let body = ErrorResponse::new(
                ErrorCode::InvalidId,
                format!("Invalid identifier: {}", raw),
            );
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        })
    }
}
