//! Static Fixture Store
//!
//! Model descriptors served by both the live registry and the static
//! dispatch path, plus the canned responses static mode hands back in place
//! of generative-AI output.

use std::collections::BTreeMap;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde_json::json;

use crate::model::{ModelDescriptor, ModelKind, ModelMetadata};

pub const TRANSFORMER_MODEL_ID: &str = "model_bert_sentiment";
pub const VISION_MODEL_ID: &str = "model_resnet50_classifier";
pub const TABULAR_MODEL_ID: &str = "model_random_forest";

pub const STATIC_CONTACT_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";
pub const STATIC_AI_MESSAGE: &str =
    "AI generation is available in the full deployment. This is a static demo version.";

/// All showcased models, in display order.
pub fn models() -> Vec<ModelDescriptor> {
    vec![
        ModelDescriptor {
            id: TRANSFORMER_MODEL_ID.to_string(),
            name: "BERT Sentiment Analyzer".to_string(),
            kind: ModelKind::Transformer,
            description: "Fine-tuned BERT model for sentiment analysis of product reviews".to_string(),
            declared_accuracy: 94.2,
            training_description: "Amazon Product Reviews Dataset (50K samples)".to_string(),
            size_label: "435 MB".to_string(),
            metadata: ModelMetadata {
                framework: "PyTorch + Transformers".to_string(),
                input_shape: Some("Variable length text (max 512 tokens)".to_string()),
                output_classes: Some(strings(&["negative", "neutral", "positive"])),
                hyperparameters: Some(params([
                    ("epochs", json!(3)),
                    ("batch_size", json!(16)),
                    ("learning_rate", json!(0.00002)),
                ])),
            },
        },
        ModelDescriptor {
            id: VISION_MODEL_ID.to_string(),
            name: "ResNet50 Image Classifier".to_string(),
            kind: ModelKind::Vision,
            description: "Pre-trained ResNet50 fine-tuned for custom image classification".to_string(),
            declared_accuracy: 89.7,
            training_description: "Custom dataset + ImageNet transfer learning".to_string(),
            size_label: "98 MB".to_string(),
            metadata: ModelMetadata {
                framework: "TensorFlow/Keras".to_string(),
                input_shape: Some("224x224x3".to_string()),
                output_classes: Some(strings(&["cat", "dog", "bird", "car", "plane"])),
                hyperparameters: Some(params([
                    ("epochs", json!(20)),
                    ("batch_size", json!(32)),
                    ("learning_rate", json!(0.001)),
                ])),
            },
        },
        ModelDescriptor {
            id: TABULAR_MODEL_ID.to_string(),
            name: "Random Forest Predictor".to_string(),
            kind: ModelKind::Tabular,
            description: "Ensemble model for tabular data prediction and feature importance analysis"
                .to_string(),
            declared_accuracy: 91.5,
            training_description: "Structured business dataset (10K records)".to_string(),
            size_label: "12 MB".to_string(),
            metadata: ModelMetadata {
                framework: "Scikit-learn".to_string(),
                input_shape: Some("15 numerical features".to_string()),
                output_classes: Some(strings(&["class_0", "class_1"])),
                hyperparameters: Some(params([
                    ("max_depth", json!(10)),
                    ("n_estimators", json!(100)),
                    ("min_samples_split", json!(5)),
                ])),
            },
        },
    ]
}

pub fn find(id: &str) -> Option<ModelDescriptor> {
    models().into_iter().find(|m| m.id == id)
}

/// Markdown report returned in place of a generated one.
pub fn demo_report(model: &ModelDescriptor) -> String {
    format!(
        "# {} Technical Report\n\n\
         This is a demonstration report for the static deployment. \
         The full interactive version includes detailed AI-generated technical analysis.\n\n\
         - Type: {}\n\
         - Framework: {}\n\
         - Accuracy: {}%\n\
         - Trained on: {}\n",
        model.name, model.kind, model.metadata.framework, model.declared_accuracy, model.training_description,
    )
}

/// SVG placeholder as a base64 data URI, echoing the start of the prompt.
pub fn placeholder_image(prompt: &str) -> String {
    let excerpt = escape_xml(&prompt.chars().take(30).collect::<String>());
    let svg = format!(
        r##"<svg width="400" height="300" xmlns="http://www.w3.org/2000/svg">
  <rect width="400" height="300" fill="#f3f4f6"/>
  <text x="200" y="150" text-anchor="middle" font-family="Arial" font-size="16" fill="#6b7280">AI Image Generation Demo</text>
  <text x="200" y="180" text-anchor="middle" font-family="Arial" font-size="12" fill="#9ca3af">Prompt: {excerpt}...</text>
</svg>"##
    );
    format!("data:image/svg+xml;base64,{}", BASE64.encode(svg))
}

pub fn placeholder_video_concept(prompt: &str) -> String {
    format!(
        "Video concept for \"{}\" is available in the full deployment.",
        prompt.chars().take(60).collect::<String>()
    )
}

pub fn placeholder_analysis(prompt: &str) -> String {
    format!(
        "Prompt analysis is available in the full deployment. Your prompt has {} words.",
        prompt.split_whitespace().count()
    )
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn params<const N: usize>(pairs: [(&str, serde_json::Value); N]) -> BTreeMap<String, serde_json::Value> {
    pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

fn escape_xml(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
