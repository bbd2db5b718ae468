use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errors returned by the JSON API. Rendered as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Animal name is required")]
    MissingName,

    #[error("Animal not found")]
    NotFound,

    #[error("Image generation failed")]
    GenerationFailed,

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingName => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::GenerationFailed | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Log an internal error and return the sanitized variant. The full error stays
    /// server-side; clients only see a generic message.
    pub fn internal(e: impl std::fmt::Display) -> Self {
        tracing::error!("Internal error: {}", e);
        Self::Internal
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
