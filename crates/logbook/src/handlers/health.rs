//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/healthz` - Storage probe (runs a trivial query on the engine)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting connections.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Storage health.
///
/// Returns 200 with the engine name if a trivial query succeeds, 503 otherwise.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> Response {
    let engine = state.engine.name();

    match state.engine.query("SELECT 1 AS ok", vec![]).await {
        Ok(_) => (
            StatusCode::OK,
            Json(serde_json::json!({ "healthy": true, "engine": engine })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(engine, error = %e, "Storage health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "healthy": false,
                    "engine": engine,
                    "error": e.to_string()
                })),
            )
                .into_response()
        }
    }
}
