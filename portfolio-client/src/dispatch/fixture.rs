//! Static dispatch against in-memory fixtures

use std::time::Duration;

use async_trait::async_trait;
use portfolio_shared::{
    fixtures, simulate, AnalysisResponse, ContactRequest, ImageResponse, ModelDescriptor,
    PredictionError, PredictionInput, PredictionResult, PromptRequest, VideoConceptResponse,
};
use rand::Rng;

use super::{DeployMode, PortfolioApi};
use crate::constants;
use crate::error::{DispatchError, DispatchResult};

/// Artificial latency applied before every static response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub min: Duration,
    /// Exclusive upper bound
    pub max: Duration,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            min: Duration::from_millis(constants::STATIC_LATENCY_MIN_MS),
            max: Duration::from_millis(constants::STATIC_LATENCY_MAX_MS),
        }
    }
}

impl LatencyProfile {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.max <= self.min {
            return self.min;
        }
        rng.gen_range(self.min..self.max)
    }
}

/// Serves every operation from the Static Fixture Store
#[derive(Debug, Clone, Default)]
pub struct StaticApi {
    latency: LatencyProfile,
}

impl StaticApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(latency: LatencyProfile) -> Self {
        Self { latency }
    }

    async fn simulate_delay(&self) {
        let delay = self.latency.sample(&mut rand::thread_rng());
        tokio::time::sleep(delay).await;
    }

    fn model(model_id: &str) -> DispatchResult<ModelDescriptor> {
        fixtures::find(model_id)
            .ok_or_else(|| PredictionError::NotFound(model_id.to_string()).into())
    }

    fn prompt(prompt: &str) -> DispatchResult<String> {
        PromptRequest::new(prompt)
            .validated()
            .map_err(DispatchError::InvalidInput)
    }
}

#[async_trait]
impl PortfolioApi for StaticApi {
    fn mode(&self) -> DeployMode {
        DeployMode::Static
    }

    async fn list_models(&self) -> DispatchResult<Vec<ModelDescriptor>> {
        self.simulate_delay().await;
        Ok(fixtures::models())
    }

    async fn predict(&self, model_id: &str, input: PredictionInput) -> DispatchResult<PredictionResult> {
        self.simulate_delay().await;
        let model = Self::model(model_id)?;
        let prediction = simulate(&model, Some(&input), &mut rand::thread_rng())?;
        Ok(prediction)
    }

    async fn report(&self, model_id: &str) -> DispatchResult<String> {
        self.simulate_delay().await;
        let model = Self::model(model_id)?;
        Ok(fixtures::demo_report(&model))
    }

    async fn submit_contact(&self, fields: &ContactRequest) -> DispatchResult<String> {
        self.simulate_delay().await;
        let message = fields.validated()?;
        log::info!("Contact form submitted in static mode by {}", message.email);
        Ok(fixtures::STATIC_CONTACT_MESSAGE.to_string())
    }

    async fn generate_image(&self, prompt: &str) -> DispatchResult<ImageResponse> {
        self.simulate_delay().await;
        let prompt = Self::prompt(prompt)?;
        Ok(ImageResponse {
            success: true,
            image: fixtures::placeholder_image(&prompt),
            message: fixtures::STATIC_AI_MESSAGE.to_string(),
        })
    }

    async fn generate_video_concept(&self, prompt: &str) -> DispatchResult<VideoConceptResponse> {
        self.simulate_delay().await;
        let prompt = Self::prompt(prompt)?;
        Ok(VideoConceptResponse {
            success: true,
            concept: fixtures::placeholder_video_concept(&prompt),
            message: fixtures::STATIC_AI_MESSAGE.to_string(),
        })
    }

    async fn analyze_prompt(&self, prompt: &str) -> DispatchResult<AnalysisResponse> {
        self.simulate_delay().await;
        let prompt = Self::prompt(prompt)?;
        Ok(AnalysisResponse {
            success: true,
            analysis: fixtures::placeholder_analysis(&prompt),
            message: fixtures::STATIC_AI_MESSAGE.to_string(),
        })
    }
}
