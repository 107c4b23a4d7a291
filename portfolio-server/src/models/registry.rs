//! Model registry

use portfolio_shared::{fixtures, ModelDescriptor};

use crate::{AppError, AppResult};

/// Read-only set of showcased models, shared by handlers through `AppState`.
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    models: Vec<ModelDescriptor>,
}

impl ModelRegistry {
    pub fn new(models: Vec<ModelDescriptor>) -> Self {
        Self { models }
    }

    /// Registry seeded with the same fixtures static mode serves
    pub fn from_fixtures() -> Self {
        Self::new(fixtures::models())
    }

    pub fn list(&self) -> &[ModelDescriptor] {
        &self.models
    }

    pub fn find(&self, id: &str) -> Option<&ModelDescriptor> {
        self.models.iter().find(|m| m.id == id)
    }

    pub fn get(&self, id: &str) -> AppResult<&ModelDescriptor> {
        self.find(id)
            .ok_or_else(|| AppError::NotFound(format!("Model {} not found", id)))
    }
}
