//! JSON request and response envelopes for the `/api` surface

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::ModelDescriptor;
use crate::prediction::{PredictionInput, PredictionResult};

pub const PROMPT_REQUIRED_MESSAGE: &str = "Prompt is required";
pub const PROMPT_MAX_CHARS: usize = 2000;
const PROMPT_MAX_CHARS_U64: u64 = PROMPT_MAX_CHARS as u64;

// ============================================================================
// REQUESTS
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PromptRequest {
    #[serde(default)]
    #[validate(length(max = PROMPT_MAX_CHARS_U64, message = "Prompt must be at most 2000 characters"))]
    pub prompt: String,
}

impl PromptRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self { prompt: prompt.into() }
    }

    /// The trimmed prompt, or a user-facing validation message.
    pub fn validated(&self) -> Result<String, String> {
        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            return Err(PROMPT_REQUIRED_MESSAGE.to_string());
        }

        let trimmed = PromptRequest::new(prompt);
        trimmed.validate().map_err(|e| {
            e.field_errors()
                .get("prompt")
                .and_then(|errs| errs.first())
                .and_then(|err| err.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| "Invalid prompt".to_string())
        })?;

        Ok(trimmed.prompt)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictRequest {
    #[serde(default)]
    pub input_data: Option<PredictionInput>,
}

// ============================================================================
// RESPONSES
// ============================================================================

/// Failure envelope shared by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub success: bool,
    pub models: Vec<ModelDescriptor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelResponse {
    pub success: bool,
    pub model: ModelDescriptor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub success: bool,
    pub prediction: PredictionResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResponse {
    pub success: bool,
    pub report: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageResponse {
    pub success: bool,
    pub image: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoConceptResponse {
    pub success: bool,
    pub concept: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub success: bool,
    pub analysis: String,
    pub message: String,
}
