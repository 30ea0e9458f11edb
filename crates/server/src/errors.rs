use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use service::errors::ServiceError;

/// HTTP-facing error. Record-not-found is the only failure the services
/// report; malformed bodies are rejected by the `Json` extractor before a
/// handler runs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(msg) => ApiError::NotFound(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::NotFound(msg) = self;
        (StatusCode::NOT_FOUND, Json(serde_json::json!({ "message": msg }))).into_response()
    }
}
