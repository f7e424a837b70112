use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/health", get(health))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    let db = match state.invites.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = ?e, "health check could not reach the database");
            false
        }
    };

    Json(json!({ "status": "ok", "db": db }))
}
