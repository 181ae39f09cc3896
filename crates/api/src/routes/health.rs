//! Health check endpoint.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// GET /health — Liveness plus the fleet this instance runs under.
///
/// `packaged` is false when no archive metadata could be read at startup.
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "fleetinfo-api",
        "version": env!("CARGO_PKG_VERSION"),
        "fleet": state.info.fleet(),
        "packaged": !state.info.is_unknown()
    }))
}
