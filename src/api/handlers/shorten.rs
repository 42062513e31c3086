//! Handler for the link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Success message returned with every created link.
pub const SHORTEN_SUCCESS_MESSAGE: &str = "Shorten URL generated successfully!";

/// Creates a short code for a long URL.
///
/// # Endpoint
///
/// `POST /v1/links/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "exp": 3600
/// }
/// ```
///
/// `exp` is optional; when missing or `0` the configured default TTL applies.
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "code": "aB3xY9zQ",
///   "message": "Shorten URL generated successfully!",
///   "expires_at": "2026-01-01T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed or the URL is invalid.
/// Returns 500 Internal Server Error if no code could be allocated or the
/// store failed.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let ttl_seconds = payload.effective_ttl(state.settings.default_ttl_seconds);

    let link = state
        .allocator
        .shorten(
            &payload.url,
            ttl_seconds,
            state.settings.retry_budget,
            state.settings.deadline(),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            code: link.code.into_inner(),
            message: SHORTEN_SUCCESS_MESSAGE.to_string(),
            expires_at: link.expires_at,
        }),
    ))
}
