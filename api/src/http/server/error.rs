use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;
use thiserror::Error;
use vibecord_core::CoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{msg}")]
    BadRequest { msg: String },

    #[error("Service unavailable: {msg}")]
    ServiceUnavailable { msg: String },

    #[error("Internal server error")]
    InternalServerError,

    #[error("Failed to start server: {msg}")]
    StartupError { msg: String },
}

impl ApiError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest { .. } => "validation_error",
            ApiError::ServiceUnavailable { .. } => "service_unavailable",
            ApiError::InternalServerError | ApiError::StartupError { .. } => "internal_error",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InternalServerError | ApiError::StartupError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::StoreUnavailable(_) | CoreError::Unhealthy => {
                tracing::warn!(error = %error, "Document store unavailable");
                ApiError::ServiceUnavailable {
                    msg: error.to_string(),
                }
            }
            CoreError::ReadError { .. }
            | CoreError::WriteError { .. }
            | CoreError::DocumentNotFound { .. }
            | CoreError::SerializationError { .. } => {
                tracing::error!(error = %error, "Document store operation failed");
                ApiError::InternalServerError
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = json!({
            "error": self.error_code(),
            "message": self.to_string(),
        });
        (self.status(), Json(body)).into_response()
    }
}
