//! Health and readiness probes.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::ServerState;

/// Response for `GET /health`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime_secs: u64,
    pub tracked_materials: usize,
}

/// Liveness probe: `GET /health`
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        uptime_secs: state.uptime_secs(),
        tracked_materials: state.service.catalog().len(),
    })
}

/// Readiness probe: `GET /health/ready`
///
/// The catalog is validated at startup, so a running server is always ready.
pub async fn ready() -> &'static str {
    "ready"
}
