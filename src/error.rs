use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::gateway::GatewayError;

#[derive(Debug)]
pub enum AppError {
    Gateway(GatewayError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gateway(e) => write!(f, "{e}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Gateway(GatewayError::Connect(e)) => {
                tracing::error!(error = %e, "error connecting to MySQL");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Gateway(GatewayError::Query(e)) => {
                tracing::error!(error = %e, "invitation query failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<GatewayError> for AppError {
    fn from(e: GatewayError) -> Self {
        Self::Gateway(e)
    }
}
