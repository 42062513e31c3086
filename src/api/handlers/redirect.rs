//! Handlers for short code redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /v1/links/redirect/{*code}`
///
/// The wildcard capture may carry a leading `/`; the resolver strips it.
///
/// # Response
///
/// `302 Found` with `Location` set to the stored URL.
///
/// # Errors
///
/// Returns 400 Bad Request if the code is empty.
/// Returns 404 Not Found if the code never existed or has expired.
/// Returns 500 Internal Server Error if the store failed.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Response, AppError> {
    resolve_and_redirect(&state, &code).await
}

/// Handles the redirect route with no code segment at all.
///
/// # Endpoint
///
/// `GET /v1/links/redirect`
pub async fn redirect_without_code_handler(
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    resolve_and_redirect(&state, "").await
}

async fn resolve_and_redirect(state: &AppState, code: &str) -> Result<Response, AppError> {
    let url = state
        .resolver
        .resolve(code, state.settings.deadline())
        .await?;

    let location = HeaderValue::try_from(url).map_err(|e| {
        tracing::error!(code, error = %e, "Stored URL is not a valid Location header");
        AppError::internal("Internal Server Error", json!({}))
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
