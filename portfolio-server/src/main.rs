//! Portfolio API server binary

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use portfolio_server::{
    create_router, db, AppState, Config, ContactStore, ContactStoreKind, GeminiClient,
    MemoryContactStore, PgContactStore,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    init_logging(&config);

    tracing::info!("Portfolio API server starting...");

    let contacts: Arc<dyn ContactStore> = match config.contact_store {
        ContactStoreKind::Postgres => {
            tracing::info!("Database: {}", config.database_url.split('@').last().unwrap_or("***"));

            let pool = db::create_pool(&config.database_url, config.db_timeout())
                .await
                .context("Failed to create database pool")?;

            tracing::info!("Running database migrations...");
            db::run_migrations(&pool)
                .await
                .context("Failed to run migrations")?;

            Arc::new(PgContactStore::new(pool, config.db_timeout()))
        }
        ContactStoreKind::Memory => {
            tracing::warn!("Using in-memory contact store; messages are lost on restart");
            Arc::new(MemoryContactStore::new())
        }
    };

    let genai = GeminiClient::new(&config.gemini_base_url, &config.gemini_api_key, config.ai_timeout())
        .context("Failed to create generative AI client")?;
    if !genai.is_configured() {
        tracing::warn!("GEMINI_API_KEY is not set; AI endpoints will return errors");
    }

    let state = AppState::new(config.clone(), contacts, Arc::new(genai));
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("🚀 Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "portfolio_server=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.log_json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
