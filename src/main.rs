mod config;
mod error;
mod gateway;
mod models;
mod routes;

use std::sync::Arc;

use axum::Router;
use config::Config;
use gateway::{Gateway, InviteLookup};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

const LISTEN_ADDR: &str = "0.0.0.0:9999";

#[derive(Clone)]
pub struct AppState {
    pub invites: Arc<dyn InviteLookup>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env();

    let state = AppState {
        invites: Arc::new(Gateway::new(&config)),
    };

    let app = Router::new()
        .merge(routes::api_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    tracing::info!("listening on {}", LISTEN_ADDR);

    let listener = tokio::net::TcpListener::bind(LISTEN_ADDR).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
