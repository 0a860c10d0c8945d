//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/healthz` - JSON status body

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting
/// connections.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Health status.
#[axum::debug_handler]
pub async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
