//! IdeaForge — AI startup-idea analysis server.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod auth;
mod routes;
mod state;

use state::AppState;

fn resolve_data_dir() -> PathBuf {
    std::env::var("IDEAFORGE_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let data_dir = resolve_data_dir();
    info!("Data directory: {}", data_dir.display());

    let config = ideaforge_core::ForgeConfig::from_env(&data_dir)?;
    let port = config.port;

    let store = ideaforge_store::SqliteStore::open(&config.data_paths.db)
        .map_err(|e| anyhow::anyhow!("Failed to open store: {}", e))?;

    // Classifier backends: ONNX when built in and models are present,
    // deterministic fallbacks otherwise.
    let sentiment = ideaforge_classify::create_sentiment_backend(&config.data_paths.models);
    let topics = ideaforge_classify::create_topic_backend(&config.data_paths.models);

    let llm_config = ideaforge_llm::LLMConfig::load(&config.data_paths.llm_config_file);
    let llm = ideaforge_llm::GenAiClient::new(llm_config);

    let state = Arc::new(AppState::new(config, store, sentiment, topics, llm));

    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("IdeaForge server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
