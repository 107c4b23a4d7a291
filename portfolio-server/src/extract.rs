//! Request extractors

use axum::extract::FromRequest;
use serde::de::DeserializeOwned;

use crate::{AppError, AppResult};

/// `Json` whose rejections become `AppError::ValidationError` (400 with the
/// standard failure envelope) instead of axum's plain-text responses.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Decode a body that may be omitted. Empty or blank bodies yield `T::default()`;
/// anything else must be valid JSON for `T`.
pub fn optional_json<T: DeserializeOwned + Default>(body: &[u8]) -> AppResult<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(body)
        .map_err(|e| AppError::ValidationError(format!("Invalid request body: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_shared::{PredictRequest, PredictionInput};

    #[test]
    fn test_optional_json_empty_body() {
        let req: PredictRequest = optional_json(b"").unwrap();
        assert!(req.input_data.is_none());

        let req: PredictRequest = optional_json(b"  \n").unwrap();
        assert!(req.input_data.is_none());
    }

    #[test]
    fn test_optional_json_present_body() {
        let req: PredictRequest = optional_json(br#"{"inputData": [1.0, 2.0]}"#).unwrap();
        assert_eq!(req.input_data, Some(PredictionInput::Features(vec![1.0, 2.0])));
    }

    #[test]
    fn test_optional_json_malformed_body() {
        let err = optional_json::<PredictRequest>(b"{not json").unwrap_err();
        assert!(matches!(err, AppError::ValidationError(msg) if msg.starts_with("Invalid request body")));
    }
}
