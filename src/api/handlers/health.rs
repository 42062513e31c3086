//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service identity and store connectivity.
///
/// # Endpoint
///
/// `GET /health-check`
///
/// # Response Codes
///
/// - **200 OK**: Store reachable
/// - **503 Service Unavailable**: Store ping failed or timed out
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "message": "OK",
///   "service_name": "shortlink",
///   "instance_id": "6f1c0e0a-1a4b-4bd4-9a53-3f0f3c2b7f11",
///   "version": "0.1.0",
///   "checks": {
///     "store": { "status": "ok", "message": "redis reachable" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_store(&state).await;
    let healthy = store_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        message: if healthy { "OK" } else { "Store unavailable" }.to_string(),
        service_name: state.service.service_name.clone(),
        instance_id: state.service.instance_id.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { store: store_check },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Pings the link store under the request deadline.
async fn check_store(state: &AppState) -> CheckStatus {
    let backend = state.store.backend_name();

    match state.settings.deadline().run(state.store.ping()).await {
        Ok(()) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} reachable", backend)),
        },
        Err(e) => {
            tracing::warn!(backend, error = %e, "Health check: store ping failed");
            CheckStatus {
                status: "error".to_string(),
                message: Some(format!("{} unreachable", backend)),
            }
        }
    }
}
