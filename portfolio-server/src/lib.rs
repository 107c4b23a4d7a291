//! Portfolio API server
//!
//! Live backend for the portfolio site: contact form persistence, the mock
//! model showcase and generative-AI helpers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    PORTFOLIO API                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌─────────────────┐  ┌──────────────────┐  │
//! │  │  Router   │  │  Model Registry │  │  Generative AI   │  │
//! │  │  (Axum)   │  │  (fixtures)     │  │  (Gemini REST)   │  │
//! │  └─────┬─────┘  └─────────────────┘  └──────────────────┘  │
//! │        ▼                                                    │
//! │  ┌─────────────────────────┐                                │
//! │  │ Contact Store           │                                │
//! │  │ (PostgreSQL | memory)   │                                │
//! │  └─────────────────────────┘                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod genai;
pub mod handlers;
pub mod models;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use config::{Config, ContactStoreKind};
pub use error::{AppError, AppResult};
pub use genai::{GeminiClient, GenerativeClient};
pub use models::{ContactStore, MemoryContactStore, ModelRegistry, PgContactStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ModelRegistry>,
    pub contacts: Arc<dyn ContactStore>,
    pub genai: Arc<dyn GenerativeClient>,
    pub config: Config,
}

impl AppState {
    pub fn new(
        config: Config,
        contacts: Arc<dyn ContactStore>,
        genai: Arc<dyn GenerativeClient>,
    ) -> Self {
        Self {
            registry: Arc::new(ModelRegistry::from_fixtures()),
            contacts,
            genai,
            config,
        }
    }
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/api/contact", post(handlers::contact::submit))

        // Generative AI
        .route("/api/generate-image", post(handlers::generate::image))
        .route("/api/generate-video", post(handlers::generate::video))
        .route("/api/analyze-prompt", post(handlers::generate::analyze))

        // Model showcase
        .route("/api/models", get(handlers::models::list))
        .route("/api/models/:id", get(handlers::models::get))
        .route("/api/models/:id/predict", post(handlers::models::predict))
        .route("/api/models/:id/report", post(handlers::models::report));

    Router::new()
        .route("/health", get(handlers::health::check))
        .merge(api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
