//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health-check` - Service identity and store connectivity
//! - `/v1/links/*`        - Create and redirect short links
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routes with state and tracing applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health-check", get(health_handler))
        .nest("/v1", api::routes::link_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service: [`router`] behind trailing-slash normalization.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
