//! Simulated predictions
//!
//! Produces demonstration values shaped like the output of each model kind.
//! Nothing here is computed from the input: values are drawn from the
//! supplied RNG, so repeated calls differ.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{ModelDescriptor, ModelKind};

/// Labels used when a vision descriptor declares no output classes.
pub const DEFAULT_VISION_CLASSES: [&str; 10] = [
    "cat", "dog", "bird", "car", "plane", "ship", "truck", "deer", "frog", "horse",
];

/// Substituted for empty vision input.
pub const DEFAULT_IMAGE_DESCRIPTION: &str = "A sample image for classification";

pub const INVALID_FEATURES_MESSAGE: &str = "Please enter comma-separated numerical features";

const TOP_PREDICTIONS: usize = 3;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("Model {0} not found")]
    NotFound(String),

    #[error("{0}")]
    InvalidInput(String),
}

// ============================================================================
// INPUT
// ============================================================================

/// The `inputData` of a predict call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictionInput {
    Features(Vec<f64>),
    Text(String),
}

impl PredictionInput {
    /// Parse comma-separated user text such as `"1, 2.5, 3"`.
    pub fn parse_features(raw: &str) -> Result<Self, PredictionError> {
        let features = raw
            .split(',')
            .map(|token| token.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| PredictionError::InvalidInput(INVALID_FEATURES_MESSAGE.to_string()))?;

        if features.is_empty() || features.iter().any(|f| !f.is_finite()) {
            return Err(PredictionError::InvalidInput(INVALID_FEATURES_MESSAGE.to_string()));
        }

        Ok(PredictionInput::Features(features))
    }
}

impl From<&str> for PredictionInput {
    fn from(text: &str) -> Self {
        PredictionInput::Text(text.to_string())
    }
}

impl From<Vec<f64>> for PredictionInput {
    fn from(features: Vec<f64>) -> Self {
        PredictionInput::Features(features)
    }
}

// ============================================================================
// RESULT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub model_used: String,
    pub processing_time_ms: f64,
    #[serde(flatten)]
    pub outcome: PredictionOutcome,
}

impl PredictionResult {
    pub fn kind(&self) -> ModelKind {
        match self.outcome {
            PredictionOutcome::TransformerResult(_) => ModelKind::Transformer,
            PredictionOutcome::VisionResult(_) => ModelKind::Vision,
            PredictionOutcome::TabularResult(_) => ModelKind::Tabular,
        }
    }
}

/// Result payload, keyed by the originating model kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PredictionOutcome {
    TransformerResult(TransformerResult),
    VisionResult(VisionResult),
    TabularResult(TabularResult),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformerResult {
    pub text: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisionResult {
    pub top_predictions: Vec<ClassScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassScore {
    pub label: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabularResult {
    pub binary_prediction: u8,
    pub probability: f64,
    pub feature_importance: Vec<FeatureImportance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub feature: String,
    pub importance: f64,
}

// ============================================================================
// SIMULATORS
// ============================================================================

/// Simulate a prediction for `model`, dispatching on its kind.
pub fn simulate<R: Rng + ?Sized>(
    model: &ModelDescriptor,
    input: Option<&PredictionInput>,
    rng: &mut R,
) -> Result<PredictionResult, PredictionError> {
    let (outcome, processing_time_ms) = match model.kind {
        ModelKind::Transformer => {
            let text = require_text(input)?;
            (simulate_transformer(model, text, rng), rng.gen_range(50.0..250.0))
        }
        ModelKind::Vision => {
            let description = match input {
                None => DEFAULT_IMAGE_DESCRIPTION,
                Some(PredictionInput::Text(t)) if t.trim().is_empty() => DEFAULT_IMAGE_DESCRIPTION,
                Some(PredictionInput::Text(t)) => t.as_str(),
                Some(PredictionInput::Features(_)) => {
                    return Err(PredictionError::InvalidInput(
                        "Please describe the image to classify".to_string(),
                    ))
                }
            };
            (simulate_vision(model, description, rng), rng.gen_range(30.0..130.0))
        }
        ModelKind::Tabular => {
            let features = require_features(input)?;
            (simulate_tabular(&features, rng), rng.gen_range(10.0..60.0))
        }
    };

    Ok(PredictionResult {
        model_used: model.name.clone(),
        processing_time_ms,
        outcome,
    })
}

fn require_text(input: Option<&PredictionInput>) -> Result<&str, PredictionError> {
    match input {
        Some(PredictionInput::Text(t)) if !t.trim().is_empty() => Ok(t.as_str()),
        _ => Err(PredictionError::InvalidInput("Please enter some text to analyze".to_string())),
    }
}

fn require_features(input: Option<&PredictionInput>) -> Result<Vec<f64>, PredictionError> {
    let features = match input {
        Some(PredictionInput::Features(f)) => f.clone(),
        Some(PredictionInput::Text(raw)) => match PredictionInput::parse_features(raw)? {
            PredictionInput::Features(f) => f,
            PredictionInput::Text(_) => Vec::new(),
        },
        None => Vec::new(),
    };

    if features.is_empty() {
        return Err(PredictionError::InvalidInput(INVALID_FEATURES_MESSAGE.to_string()));
    }
    Ok(features)
}

fn simulate_transformer<R: Rng + ?Sized>(
    model: &ModelDescriptor,
    text: &str,
    rng: &mut R,
) -> PredictionOutcome {
    let label = model
        .output_classes()
        .choose(rng)
        .map(String::as_str)
        .unwrap_or("neutral");

    let excerpt: String = text.chars().take(40).collect();

    PredictionOutcome::TransformerResult(TransformerResult {
        text: format!("{} labelled \"{}\" as {}", model.name, excerpt, label),
        confidence: rng.gen_range(0.6..1.0),
    })
}

fn simulate_vision<R: Rng + ?Sized>(
    model: &ModelDescriptor,
    _description: &str,
    rng: &mut R,
) -> PredictionOutcome {
    let classes: Vec<&str> = if model.output_classes().is_empty() {
        DEFAULT_VISION_CLASSES.to_vec()
    } else {
        model.output_classes().iter().map(String::as_str).collect()
    };

    let mut scores: Vec<ClassScore> = classes
        .into_iter()
        .map(|label| ClassScore {
            label: label.to_string(),
            confidence: rng.gen::<f64>(),
        })
        .collect();

    scores.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    scores.truncate(TOP_PREDICTIONS);

    PredictionOutcome::VisionResult(VisionResult { top_predictions: scores })
}

fn simulate_tabular<R: Rng + ?Sized>(features: &[f64], rng: &mut R) -> PredictionOutcome {
    let mut importance: Vec<FeatureImportance> = (0..features.len())
        .map(|idx| FeatureImportance {
            feature: format!("feature_{}", idx + 1),
            importance: rng.gen::<f64>(),
        })
        .collect();

    importance.sort_by(|a, b| b.importance.total_cmp(&a.importance));

    PredictionOutcome::TabularResult(TabularResult {
        binary_prediction: u8::from(rng.gen_bool(0.5)),
        probability: rng.gen_range(0.6..1.0),
        feature_importance: importance,
    })
}
