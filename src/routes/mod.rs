pub mod health;
pub mod invites;

use axum::Router;
use tower_http::cors::CorsLayer;

use crate::AppState;

/// Everything under `/api`. CORS is open to any origin for these routes only.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(invites::router())
        .layer(CorsLayer::permissive())
}
