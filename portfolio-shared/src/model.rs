//! Model descriptors for the showcase

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of a showcased model. Selects the prediction simulator and the
/// shape of the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Transformer,
    #[serde(alias = "resnet50")]
    Vision,
    #[serde(alias = "sklearn")]
    Tabular,
}

impl ModelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Transformer => "transformer",
            ModelKind::Vision => "vision",
            ModelKind::Tabular => "tabular",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelMetadata {
    pub framework: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_shape: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_classes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyperparameters: Option<BTreeMap<String, serde_json::Value>>,
}

/// Metadata record for a (mock) model available for demonstration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    pub id: String,
    pub name: String,
    pub kind: ModelKind,
    pub description: String,
    pub declared_accuracy: f64,
    pub training_description: String,
    pub size_label: String,
    pub metadata: ModelMetadata,
}

impl ModelDescriptor {
    /// Declared output classes, empty when the descriptor has none.
    pub fn output_classes(&self) -> &[String] {
        self.metadata.output_classes.as_deref().unwrap_or(&[])
    }
}
