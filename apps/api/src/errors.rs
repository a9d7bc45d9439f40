use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// The wire shape is always `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or missing request field → 400.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Background image or font file not found on disk → 500.
    #[error("Missing asset: {0}")]
    AssetMissing(String),

    /// Any other failure during font loading, sizing, or drawing → 500.
    #[error("Render error: {0}")]
    Render(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::AssetMissing(msg) => {
                tracing::error!("required asset missing: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("required asset not found: {msg}"),
                )
            }
            AppError::Render(msg) => {
                tracing::error!("render failed: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::Internal(e) => {
                tracing::error!("internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
