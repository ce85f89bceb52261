use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Failure of a single metadata provider call
///
/// Always recoverable by the caller: batch and recommendation loops log it
/// and skip the title.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("Transport error: {0}")]
    Transport(reqwest::Error),

    #[error("Provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Undecodable provider response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Provider has no match: {0}")]
    NotFound(String),
}

impl From<reqwest::Error> for FetchError {
    // Request URLs carry the API key
    fn from(e: reqwest::Error) -> Self {
        FetchError::Transport(e.without_url())
    }
}

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Metadata fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Artifact error: {0}")]
    Artifact(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Fetch(FetchError::NotFound(msg)) => (StatusCode::NOT_FOUND, msg),
            AppError::Fetch(_) => {
                tracing::error!(error = %self, "Metadata provider failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "Metadata provider unavailable".to_string(),
                )
            }
            AppError::Cache(_) | AppError::Artifact(_) => {
                // Operators get the detail, callers get a generic message
                tracing::error!(error = %self, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
