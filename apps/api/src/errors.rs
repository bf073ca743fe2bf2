use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::extractor::ExtractionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant surfaces to the caller as a 500 with `{"error": "<message>"}`;
/// bad input and internal failures are intentionally reported the same way.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required form field '{0}'")]
    MissingField(&'static str),

    #[error("Malformed upload: {0}")]
    MalformedUpload(String),

    #[error("Failed to extract text from '{filename}': {source}")]
    Extraction {
        filename: String,
        #[source]
        source: ExtractionError,
    },

    #[error("Scoring failed: {0}")]
    Scoring(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        match &self {
            AppError::MissingField(_) | AppError::MalformedUpload(_) => {
                tracing::warn!("Rejected analysis request: {message}");
            }
            AppError::Extraction { .. } | AppError::Scoring(_) => {
                tracing::error!("Analysis failed: {message}");
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
            }
        }

        let body = Json(json!({ "error": message }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
