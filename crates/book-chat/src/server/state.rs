//! Application state for the chat server

use std::sync::Arc;

use crate::config::{BackendProvider, ChatConfig};
use crate::error::{Error, Result};
use crate::generation::BookAssistant;
use crate::ingestion::{load_document, FixedSizeChunker};
use crate::providers::{
    openai::{OpenAiClient, OpenAiEmbedder, OpenAiLlm},
    ollama::{OllamaClient, OllamaEmbedder, OllamaLlm},
    CompletionParams, EmbeddingProvider, LlmProvider,
};
use crate::retrieval::{build_index, Retriever};

/// Shared application state, read-only once built
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: ChatConfig,
    /// Retrieval + generation pipeline
    assistant: BookAssistant,
}

impl AppState {
    /// Wrap an already-built assistant
    pub fn new(config: ChatConfig, assistant: BookAssistant) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, assistant }),
        }
    }

    /// Load the source text, index it and wire up the providers.
    ///
    /// Fails if the source file is missing, undecodable or empty, or if the
    /// chunks cannot be embedded.
    pub async fn from_config(config: ChatConfig) -> Result<Self> {
        tracing::info!("Initializing chat state (backend: {:?})...", config.backend);

        let text = load_document(&config.source.path).await?;
        if text.is_empty() {
            return Err(Error::EmptyDocument(config.source.path.clone()));
        }

        let (embedder, llm) = Self::providers(&config)?;
        tracing::info!(
            "Providers initialized (embeddings: {}, llm: {} / {})",
            embedder.name(),
            llm.name(),
            llm.model()
        );

        let chunker = FixedSizeChunker::new(config.source.chunk_size)?;
        let index = build_index(&text, &chunker, embedder.as_ref()).await?;

        let retriever = Retriever::new(embedder, Arc::new(index), config.retrieval.top_k);
        let params = CompletionParams::from(&config.llm);
        let assistant = BookAssistant::new(retriever, llm, params);

        Ok(Self::new(config, assistant))
    }

    /// Build the embedding and completion providers for the configured backend
    fn providers(
        config: &ChatConfig,
    ) -> Result<(Arc<dyn EmbeddingProvider>, Arc<dyn LlmProvider>)> {
        match config.backend {
            BackendProvider::OpenAi => {
                tracing::info!("Using OpenAI backend at {}", config.openai.base_url);
                let client = Arc::new(OpenAiClient::from_config(config)?);
                let embedder: Arc<dyn EmbeddingProvider> = Arc::new(OpenAiEmbedder::from_client(
                    Arc::clone(&client),
                    config.embeddings.model.clone(),
                    config.embeddings.batch_size,
                ));
                let llm: Arc<dyn LlmProvider> =
                    Arc::new(OpenAiLlm::from_client(client, config.llm.model.clone()));
                Ok((embedder, llm))
            }
            BackendProvider::Ollama => {
                tracing::info!("Using Ollama backend at {}", config.ollama.base_url);
                let client = Arc::new(OllamaClient::from_config(config)?);
                let embedder: Arc<dyn EmbeddingProvider> = Arc::new(OllamaEmbedder::from_client(
                    Arc::clone(&client),
                    config.ollama.embed_model.clone(),
                ));
                let llm: Arc<dyn LlmProvider> = Arc::new(OllamaLlm::from_client(
                    client,
                    config.ollama.generate_model.clone(),
                ));
                Ok((embedder, llm))
            }
        }
    }

    /// Get configuration
    pub fn config(&self) -> &ChatConfig {
        &self.inner.config
    }

    /// Get the question-answering pipeline
    pub fn assistant(&self) -> &BookAssistant {
        &self.inner.assistant
    }
}
