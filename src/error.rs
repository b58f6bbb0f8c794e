//! Error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::logic::features::ValidationError;
use crate::logic::model::{InferenceError, UnknownCategoryError};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A submitted field is out of range or an ordinal bucket is unknown.
    /// Rejected before any state is committed.
    #[error("{0}")]
    Validation(String),

    /// The scaler/classifier collaborator failed. Never masked or retried.
    #[error("inference failed: {0}")]
    Inference(String),

    /// A performance label outside the 4 known categories reached a
    /// target lookup. Programming-invariant violation, not a user error.
    #[error("unknown performance category: {0}")]
    UnknownCategory(String),

    #[error("{0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Inference(msg) => {
                tracing::error!("Inference error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Prediction failed".to_string())
            }
            AppError::UnknownCategory(label) => {
                tracing::error!("Unknown performance category: {}", label);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal invariant violation".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<InferenceError> for AppError {
    fn from(err: InferenceError) -> Self {
        AppError::Inference(err.0)
    }
}

impl From<UnknownCategoryError> for AppError {
    fn from(err: UnknownCategoryError) -> Self {
        AppError::UnknownCategory(err.0)
    }
}
