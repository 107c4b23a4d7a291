//! Dispatch Shim - one API surface for live and static deployments
//!
//! This module handles:
//! - Resolving the deployment mode once at start-up
//! - Live calls against the backend REST endpoints
//! - Static resolution against the shared fixtures, with artificial latency

pub mod fixture;
pub mod live;
pub mod mode;

pub use fixture::{LatencyProfile, StaticApi};
pub use live::LiveApi;
pub use mode::{ClientConfig, DeployMode};

use std::sync::Arc;

use async_trait::async_trait;
use portfolio_shared::{
    AnalysisResponse, ContactRequest, ImageResponse, ModelDescriptor, PredictionInput,
    PredictionResult, VideoConceptResponse,
};

use crate::error::DispatchResult;

/// The logical operation set the frontend calls. Both implementations
/// return the same shapes; every call recomputes, nothing is cached.
#[async_trait]
pub trait PortfolioApi: Send + Sync {
    fn mode(&self) -> DeployMode;

    async fn list_models(&self) -> DispatchResult<Vec<ModelDescriptor>>;

    async fn predict(&self, model_id: &str, input: PredictionInput) -> DispatchResult<PredictionResult>;

    async fn report(&self, model_id: &str) -> DispatchResult<String>;

    /// Returns the confirmation message to show the user
    async fn submit_contact(&self, fields: &ContactRequest) -> DispatchResult<String>;

    async fn generate_image(&self, prompt: &str) -> DispatchResult<ImageResponse>;

    async fn generate_video_concept(&self, prompt: &str) -> DispatchResult<VideoConceptResponse>;

    async fn analyze_prompt(&self, prompt: &str) -> DispatchResult<AnalysisResponse>;
}

/// Pick the implementation for `config`. Call once at start-up.
pub fn connect(config: &ClientConfig) -> DispatchResult<Arc<dyn PortfolioApi>> {
    let mode = config.mode();
    log::info!("API dispatch mode: {}", mode);

    Ok(match mode {
        DeployMode::Live => Arc::new(LiveApi::new(config)?),
        DeployMode::Static => Arc::new(StaticApi::new()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_selects_implementation() {
        let api = connect(&ClientConfig::static_deploy()).unwrap();
        assert_eq!(api.mode(), DeployMode::Static);

        let api = connect(&ClientConfig::live("http://localhost:5000")).unwrap();
        assert_eq!(api.mode(), DeployMode::Live);
    }
}
