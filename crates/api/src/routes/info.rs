//! Application info endpoint.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::contributor::InfoBuilder;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/actuator/info", get(info))
}

/// GET /actuator/info — Merge the details of every registered contributor.
async fn info(State(state): State<AppState>) -> Json<serde_json::Value> {
    let mut builder = InfoBuilder::new();
    for contributor in state.contributors.iter() {
        contributor.contribute(&mut builder);
    }
    Json(builder.build())
}
