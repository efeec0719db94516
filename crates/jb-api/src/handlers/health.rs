use std::sync::atomic::Ordering;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::SharedState;

/// Liveness probe: the process is up. No dependency checks.
pub async fn livez() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Readiness probe. Reports 503 while the server drains connections
/// during shutdown.
pub async fn readyz(State(state): State<SharedState>) -> Result<Json<Value>, ApiError> {
    if !state.readiness.load(Ordering::SeqCst) {
        return Err(ApiError::ServiceUnavailable("draining".into()));
    }

    Ok(Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    })))
}
