//! Live dispatch over HTTP

use async_trait::async_trait;
use portfolio_shared::{
    AnalysisResponse, ContactRequest, ContactResponse, ErrorResponse, ImageResponse,
    ModelDescriptor, ModelsResponse, PredictRequest, PredictResponse, PredictionInput,
    PredictionResult, PromptRequest, ReportResponse, VideoConceptResponse,
};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{DeployMode, PortfolioApi};
use crate::error::{DispatchError, DispatchResult};
use crate::ClientConfig;

/// Calls the backend REST endpoints and parses their envelopes
pub struct LiveApi {
    base_url: Url,
    http_client: reqwest::Client,
}

impl LiveApi {
    pub fn new(config: &ClientConfig) -> DispatchResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| DispatchError::ServiceUnavailable(e.to_string()))?;

        let base_url = Url::parse(&config.api_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| {
                DispatchError::ServiceUnavailable(format!("invalid API URL: {}", config.api_url))
            })?;

        Ok(Self { base_url, http_client })
    }

    /// Append `segments` to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn model_endpoint(&self, model_id: &str, action: &str) -> DispatchResult<Url> {
        // `.` and `..` are dropped by path normalization and would address another route.
        if model_id.is_empty() || model_id == "." || model_id == ".." {
            return Err(DispatchError::NotFound(format!("Model {} not found", model_id)));
        }
        Ok(self.endpoint(&["api", "models", model_id, action]))
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> DispatchResult<T> {
        let response = self.http_client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| network_error(&url, e))?;

        parse_response(response).await
    }

    async fn post<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        url: Url,
        body: &B,
    ) -> DispatchResult<T> {
        let response = self.http_client
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| network_error(&url, e))?;

        parse_response(response).await
    }
}

fn network_error(url: &Url, err: reqwest::Error) -> DispatchError {
    log::warn!("Request to {} failed: {}", url, err);
    DispatchError::ServiceUnavailable(err.to_string())
}

async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> DispatchResult<T> {
    let status = response.status();

    if status.is_success() {
        return response.json().await
            .map_err(|e| DispatchError::Decode(e.to_string()));
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&text)
        .map(|e| e.message)
        .unwrap_or(text);
    let message = if message.trim().is_empty() {
        status.canonical_reason().unwrap_or("Request failed").to_string()
    } else {
        message
    };

    log::debug!("Backend returned {}: {}", status, message);

    Err(match status.as_u16() {
        400 | 422 => DispatchError::InvalidInput(message),
        404 => DispatchError::NotFound(message),
        code => DispatchError::Upstream { status: code, message },
    })
}

#[async_trait]
impl PortfolioApi for LiveApi {
    fn mode(&self) -> DeployMode {
        DeployMode::Live
    }

    async fn list_models(&self) -> DispatchResult<Vec<ModelDescriptor>> {
        let res: ModelsResponse = self.get(self.endpoint(&["api", "models"])).await?;
        Ok(res.models)
    }

    async fn predict(&self, model_id: &str, input: PredictionInput) -> DispatchResult<PredictionResult> {
        let body = PredictRequest { input_data: Some(input) };
        let res: PredictResponse = self.post(self.model_endpoint(model_id, "predict")?, &body).await?;
        Ok(res.prediction)
    }

    async fn report(&self, model_id: &str) -> DispatchResult<String> {
        let res: ReportResponse = self
            .post(self.model_endpoint(model_id, "report")?, &serde_json::json!({}))
            .await?;
        Ok(res.report)
    }

    async fn submit_contact(&self, fields: &ContactRequest) -> DispatchResult<String> {
        let res: ContactResponse = self.post(self.endpoint(&["api", "contact"]), fields).await?;
        Ok(res.message)
    }

    async fn generate_image(&self, prompt: &str) -> DispatchResult<ImageResponse> {
        self.post(self.endpoint(&["api", "generate-image"]), &PromptRequest::new(prompt)).await
    }

    async fn generate_video_concept(&self, prompt: &str) -> DispatchResult<VideoConceptResponse> {
        self.post(self.endpoint(&["api", "generate-video"]), &PromptRequest::new(prompt)).await
    }

    async fn analyze_prompt(&self, prompt: &str) -> DispatchResult<AnalysisResponse> {
        self.post(self.endpoint(&["api", "analyze-prompt"]), &PromptRequest::new(prompt)).await
    }
}
