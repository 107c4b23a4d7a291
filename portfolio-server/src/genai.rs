//! Generative-AI client
//!
//! Thin REST client for the Gemini `generateContent` endpoint. Handlers only
//! see the [`GenerativeClient`] trait so tests can swap in a stub.

use std::time::Duration;

use async_trait::async_trait;
use portfolio_shared::ModelDescriptor;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const IMAGE_MODEL: &str = "gemini-2.0-flash-preview-image-generation";
pub const VIDEO_CONCEPT_MODEL: &str = "gemini-2.5-pro";
pub const ANALYSIS_MODEL: &str = "gemini-2.5-flash";
pub const REPORT_MODEL: &str = "gemini-2.5-pro";

#[derive(Debug, Error)]
pub enum GenAiError {
    #[error("generative AI API key is not configured")]
    MissingApiKey,

    #[error("network error: {0}")]
    Network(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("empty response: {0}")]
    EmptyResponse(&'static str),
}

/// An image returned inline by the model
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedImage {
    pub mime_type: String,
    /// Base64 payload as delivered by the API
    pub data: String,
}

impl GeneratedImage {
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

#[async_trait]
pub trait GenerativeClient: Send + Sync + 'static {
    async fn generate_text(&self, model: &str, prompt: &str) -> Result<String, GenAiError>;

    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, GenAiError>;
}

// ============================================================================
// PROMPTS
// ============================================================================

pub fn video_concept_prompt(prompt: &str) -> String {
    format!(
        "Create a detailed video concept for: {}. Include scene descriptions, camera movements, and visual elements.",
        prompt
    )
}

pub fn analysis_prompt(prompt: &str) -> String {
    format!(
        "Analyze this creative prompt and suggest improvements for better AI generation results: \"{}\"",
        prompt
    )
}

pub fn report_prompt(model: &ModelDescriptor) -> String {
    format!(
        "Generate a detailed technical report for this ML model:\n\n\
         Name: {}\n\
         Type: {}\n\
         Framework: {}\n\
         Accuracy: {}%\n\
         Trained on: {}\n\n\
         Include sections on: Architecture Overview, Performance Metrics, Use Cases, \
         Technical Specifications, and Deployment Considerations.",
        model.name, model.kind, model.metadata.framework, model.declared_accuracy, model.training_description,
    )
}

// ============================================================================
// GEMINI REST CLIENT
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<&'static str>,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    text: Option<String>,
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

impl GenerateResponse {
    fn parts(&self) -> impl Iterator<Item = &ResponsePart> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.iter())
            .into_iter()
            .flatten()
    }

    fn text(&self) -> Option<String> {
        let text: String = self.parts().filter_map(|p| p.text.as_deref()).collect();
        (!text.trim().is_empty()).then_some(text)
    }

    fn image(&self) -> Option<GeneratedImage> {
        self.parts()
            .filter_map(|p| p.inline_data.as_ref())
            .find(|d| !d.data.is_empty())
            .map(|d| GeneratedImage {
                mime_type: d.mime_type.clone(),
                data: d.data.clone(),
            })
    }
}

pub struct GeminiClient {
    base_url: String,
    api_key: String,
    http_client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, GenAiError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenAiError::Network(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            http_client,
        })
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        generation_config: Option<GenerationConfig>,
    ) -> Result<GenerateResponse, GenAiError> {
        if !self.is_configured() {
            return Err(GenAiError::MissingApiKey);
        }

        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        let request = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![TextPart { text: prompt }],
            }],
            generation_config,
        };

        tracing::debug!(model, prompt_chars = prompt.chars().count(), "Calling generative AI");

        let response = self.http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenAiError::Network(e.to_string()))?;

        if response.status().is_success() {
            response.json().await
                .map_err(|e| GenAiError::Parse(e.to_string()))
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            Err(GenAiError::Api { status, message })
        }
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate_text(&self, model: &str, prompt: &str) -> Result<String, GenAiError> {
        self.generate(model, prompt, None)
            .await?
            .text()
            .ok_or(GenAiError::EmptyResponse("no text in response"))
    }

    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, GenAiError> {
        let config = GenerationConfig {
            response_modalities: vec!["TEXT", "IMAGE"],
        };

        self.generate(IMAGE_MODEL, prompt, Some(config))
            .await?
            .image()
            .ok_or(GenAiError::EmptyResponse("no image data in response"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_shared::fixtures;

    #[test]
    fn test_request_wire_shape() {
        let request = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![TextPart { text: "a red fox" }],
            }],
            generation_config: Some(GenerationConfig {
                response_modalities: vec!["TEXT", "IMAGE"],
            }),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "a red fox");
        assert_eq!(json["generationConfig"]["responseModalities"][1], "IMAGE");
    }

    #[test]
    fn test_response_text_and_image() {
        let body = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "Here is your fox."},
                        {"inlineData": {"mimeType": "image/png", "data": "iVBORw0KGgo="}}
                    ]
                }
            }]
        }"#;
        let response: GenerateResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.text().as_deref(), Some("Here is your fox."));
        let image = response.image().unwrap();
        assert_eq!(image.to_data_uri(), "data:image/png;base64,iVBORw0KGgo=");
    }

    #[test]
    fn test_empty_response() {
        let response: GenerateResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(response.text().is_none());
        assert!(response.image().is_none());
    }

    #[test]
    fn test_report_prompt_mentions_sections() {
        let model = fixtures::find(fixtures::TABULAR_MODEL_ID).unwrap();
        let prompt = report_prompt(&model);
        assert!(prompt.contains("Random Forest Predictor"));
        assert!(prompt.contains("Type: tabular"));
        assert!(prompt.contains("Deployment Considerations"));
    }

    #[test]
    fn test_missing_key_fails_fast() {
        let client = GeminiClient::new("http://127.0.0.1:9", "", Duration::from_secs(1)).unwrap();
        assert!(!client.is_configured());

        let err = tokio_test::block_on(client.generate_text(ANALYSIS_MODEL, "hello")).unwrap_err();
        assert!(matches!(err, GenAiError::MissingApiKey));
    }
}
