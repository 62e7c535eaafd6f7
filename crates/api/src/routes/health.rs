use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database is configured but unreachable.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether a database connection string is configured.
    pub db_configured: bool,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// GET /health -- returns service and database health.
///
/// Running without a database is a supported mode (reads degrade to static
/// content), so an unconfigured store still reports `ok`.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_configured = state.storage.is_configured();
    let db_healthy = db_configured && state.storage.health_check().await.is_ok();

    let status = if db_configured && !db_healthy {
        "degraded"
    } else {
        "ok"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_configured,
        db_healthy,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
