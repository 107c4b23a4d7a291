//! Dispatch errors

use thiserror::Error;

use portfolio_shared::{ContactError, PredictionError};

pub type DispatchResult<T> = Result<T, DispatchError>;

/// Errors surfaced to the UI by either dispatch path
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    #[error("{0}")]
    NotFound(String),

    /// Bad user input; the message is meant for a validation notice
    #[error("{0}")]
    InvalidInput(String),

    /// The backend could not be reached
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Server error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl DispatchError {
    /// Whether a manual retry may succeed. Nothing is retried automatically.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ServiceUnavailable(_) | Self::Upstream { .. })
    }

    /// Short text for a dismissible error notification
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(msg) | Self::InvalidInput(msg) => msg.clone(),
            Self::ServiceUnavailable(_) => {
                "The server could not be reached. Please try again.".to_string()
            }
            Self::Upstream { message, .. } if !message.is_empty() => message.clone(),
            Self::Upstream { .. } | Self::Decode(_) => {
                "Something went wrong. Please try again later.".to_string()
            }
        }
    }
}

impl From<PredictionError> for DispatchError {
    fn from(err: PredictionError) -> Self {
        match err {
            PredictionError::NotFound(_) => Self::NotFound(err.to_string()),
            PredictionError::InvalidInput(msg) => Self::InvalidInput(msg),
        }
    }
}

impl From<ContactError> for DispatchError {
    fn from(err: ContactError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
