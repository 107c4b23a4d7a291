//! Model showcase handlers

use axum::{body::Bytes, extract::{Path, State}, Json};
use portfolio_shared::{
    simulate, ModelResponse, ModelsResponse, PredictRequest, PredictResponse, ReportResponse,
};

use crate::extract::optional_json;
use crate::genai::{self, REPORT_MODEL};
use crate::{AppResult, AppState};

/// List all showcased models
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ModelsResponse>> {
    Ok(Json(ModelsResponse {
        success: true,
        models: state.registry.list().to_vec(),
    }))
}

/// Get single model
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ModelResponse>> {
    let model = state.registry.get(&id)?.clone();
    Ok(Json(ModelResponse { success: true, model }))
}

/// Run a simulated prediction
///
/// The model is resolved before the body is read, so an unknown id is 404
/// whatever the body holds.
pub async fn predict(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> AppResult<Json<PredictResponse>> {
    let model = state.registry.get(&id)?;
    let req: PredictRequest = optional_json(&body)?;

    let prediction = simulate(model, req.input_data.as_ref(), &mut rand::thread_rng())?;

    tracing::debug!(
        model_id = %model.id,
        kind = %model.kind,
        processing_time_ms = prediction.processing_time_ms,
        "Simulated prediction"
    );

    Ok(Json(PredictResponse { success: true, prediction }))
}

/// Generate a technical report for a model
pub async fn report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ReportResponse>> {
    let prompt = genai::report_prompt(state.registry.get(&id)?);

    let report = state.genai.generate_text(REPORT_MODEL, &prompt).await?;

    Ok(Json(ReportResponse { success: true, report }))
}
