use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

pub type DemoResult<T> = Result<T, DemoError>;

#[derive(thiserror::Error, Debug)]
pub enum DemoError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("failed to render html: {0}")]
    Render(#[from] std::fmt::Error),
    #[error("output already exists: {}", .0.display())]
    OutputExists(PathBuf),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("not found: {0}")]
    NotFound(String),
}

impl DemoError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for DemoError {
    fn into_response(self) -> Response {
        let status = match self {
            DemoError::NotFound(_) => StatusCode::NOT_FOUND,
            DemoError::OutputExists(_) => StatusCode::CONFLICT,
            DemoError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DemoError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            DemoError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DemoError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.to_string();
        let error = match &self {
            DemoError::Io { .. } => "io",
            DemoError::Serialization(_) => "serialization",
            DemoError::Render(_) => "render",
            DemoError::OutputExists(_) => "output_exists",
            DemoError::Configuration(_) => "configuration",
            DemoError::NotFound(_) => "not_found",
        };

        let payload = ErrorResponse {
            error: error.to_string(),
            message,
        };

        (status, Json(payload)).into_response()
    }
}
