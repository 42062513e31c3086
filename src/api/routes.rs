//! API route configuration.

use crate::api::handlers::{redirect_handler, redirect_without_code_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Short-link routes, mounted under `/v1`.
///
/// # Endpoints
///
/// - `POST /links/shorten`          - Create a short code
/// - `GET  /links/redirect/{*code}` - Redirect to the stored URL
/// - `GET  /links/redirect`         - Rejected: missing code
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/links/shorten", post(shorten_handler))
        .route("/links/redirect", get(redirect_without_code_handler))
        .route("/links/redirect/{*code}", get(redirect_handler))
}
