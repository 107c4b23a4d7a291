//! Portfolio shared types
//!
//! Data model, wire envelopes and the Static Fixture Store used by both the
//! live server and the static dispatch path. Keeping the fixtures here is
//! what makes `list_models()` return the same ids in either mode.

pub mod contact;
pub mod envelope;
pub mod fixtures;
pub mod model;
pub mod prediction;

pub use contact::{ContactError, ContactMessage, ContactRequest};
pub use envelope::*;
pub use model::{ModelDescriptor, ModelKind, ModelMetadata};
pub use prediction::{
    simulate, ClassScore, FeatureImportance, PredictionError, PredictionInput, PredictionOutcome,
    PredictionResult, TabularResult, TransformerResult, VisionResult,
};
