//! Generative-AI handlers

use axum::{extract::State, Json};
use portfolio_shared::{AnalysisResponse, ImageResponse, PromptRequest, VideoConceptResponse};

use crate::extract::ApiJson;
use crate::genai::{self, ANALYSIS_MODEL, VIDEO_CONCEPT_MODEL};
use crate::{AppError, AppResult, AppState};

pub const IMAGE_SUCCESS_MESSAGE: &str = "Image generated successfully";
pub const VIDEO_CONCEPT_MESSAGE: &str =
    "Video generation is currently in concept mode. Full video generation coming soon!";
pub const ANALYSIS_SUCCESS_MESSAGE: &str = "Prompt analyzed successfully";

fn validated_prompt(req: &PromptRequest) -> AppResult<String> {
    req.validated().map_err(AppError::ValidationError)
}

/// Generate an image from a prompt
pub async fn image(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<PromptRequest>,
) -> AppResult<Json<ImageResponse>> {
    let prompt = validated_prompt(&req)?;

    let image = state.genai.generate_image(&prompt).await?;

    Ok(Json(ImageResponse {
        success: true,
        image: image.to_data_uri(),
        message: IMAGE_SUCCESS_MESSAGE.to_string(),
    }))
}

/// Generate a textual video concept from a prompt
pub async fn video(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<PromptRequest>,
) -> AppResult<Json<VideoConceptResponse>> {
    let prompt = validated_prompt(&req)?;

    let concept = state.genai
        .generate_text(VIDEO_CONCEPT_MODEL, &genai::video_concept_prompt(&prompt))
        .await?;

    Ok(Json(VideoConceptResponse {
        success: true,
        concept,
        message: VIDEO_CONCEPT_MESSAGE.to_string(),
    }))
}

/// Suggest improvements to a creative prompt
pub async fn analyze(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<PromptRequest>,
) -> AppResult<Json<AnalysisResponse>> {
    let prompt = validated_prompt(&req)?;

    let analysis = state.genai
        .generate_text(ANALYSIS_MODEL, &genai::analysis_prompt(&prompt))
        .await?;

    Ok(Json(AnalysisResponse {
        success: true,
        analysis,
        message: ANALYSIS_SUCCESS_MESSAGE.to_string(),
    }))
}
