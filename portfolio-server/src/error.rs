//! Error handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use portfolio_shared::{ContactError, ErrorResponse, PredictionError};

use crate::genai::GenAiError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    // Missing or malformed request fields
    ValidationError(String),

    // Unknown model id
    NotFound(String),

    // Contact store failures
    DatabaseError(String),

    // Generative-AI failures
    ExternalServiceError(String),

    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.as_str()),
            AppError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error. Please try again later.")
            }
            AppError::ExternalServiceError(msg) => {
                tracing::error!("External service error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "AI service is unavailable. Please try again later.")
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error. Please try again later.")
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl From<GenAiError> for AppError {
    fn from(err: GenAiError) -> Self {
        AppError::ExternalServiceError(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<ContactError> for AppError {
    fn from(err: ContactError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<PredictionError> for AppError {
    fn from(err: PredictionError) -> Self {
        match err {
            PredictionError::NotFound(_) => AppError::NotFound("Model not found".to_string()),
            PredictionError::InvalidInput(msg) => AppError::ValidationError(msg),
        }
    }
}
