//! Book chat server binary
//!
//! Run with: cargo run -p book-chat --bin book-chat-server

use std::path::PathBuf;

use book_chat::{
    config::{BackendProvider, ChatConfig},
    providers::ollama::OllamaClient,
    server::{state::AppState, ChatServer},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "book_chat=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config_path = std::env::var_os("BOOK_CHAT_CONFIG").map(PathBuf::from);
    let config = ChatConfig::load(config_path.as_deref())?;

    tracing::info!("Configuration loaded");
    tracing::info!("  - Source text: {}", config.source.path.display());
    tracing::info!("  - Chunk size: {}", config.source.chunk_size);
    tracing::info!("  - Backend: {:?}", config.backend);
    tracing::info!("  - Top k: {}", config.retrieval.top_k);

    if config.backend == BackendProvider::Ollama {
        let client = OllamaClient::from_config(&config)?;
        if client.health_check().await {
            tracing::info!("Ollama is running");
        } else {
            tracing::warn!("Ollama not available at {}", config.ollama.base_url);
        }
    }

    // Source text and index must be ready before the listener is bound
    let state = match AppState::from_config(config).await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Startup failed: {}", e);
            return Err(e.into());
        }
    };

    let server = ChatServer::new(state);

    println!("\nServer starting...");
    println!("  Chat UI: http://{}/", server.address());
    println!("  POST /chatbot  {{\"question\": \"...\"}}");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
