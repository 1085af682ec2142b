//! Configuration for the book chat service

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Backend provider (openai or ollama)
    pub backend: BackendProvider,
    /// Server configuration
    pub server: ServerConfig,
    /// Source document configuration
    pub source: SourceConfig,
    /// Embedding configuration
    pub embeddings: EmbeddingConfig,
    /// Completion model configuration
    pub llm: LlmConfig,
    /// OpenAI API configuration
    pub openai: OpenAiConfig,
    /// Ollama configuration (used when backend = ollama)
    pub ollama: OllamaConfig,
    /// Retrieval configuration
    pub retrieval: RetrievalConfig,
}

impl ChatConfig {
    /// Load configuration from an optional TOML file, then apply environment
    /// overrides and validate.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    Error::config(format!("Failed to read {}: {}", path.display(), e))
                })?;
                Self::from_toml(&content)?
            }
            None => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text. Missing sections fall back to defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Invalid TOML: {}", e)))
    }

    /// Apply environment overrides through the given lookup
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.openai.api_key.is_none() {
            self.openai.api_key = lookup("OPENAI_API_KEY").filter(|k| !k.is_empty());
        }
        if let Some(url) = lookup("OPENAI_BASE_URL") {
            self.openai.base_url = url;
        }
        if let Some(path) = lookup("BOOK_CHAT_SOURCE") {
            self.source.path = PathBuf::from(path);
        }
        if let Some(port) = lookup("BOOK_CHAT_PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
    }

    /// Check that the configuration can drive the pipeline
    pub fn validate(&self) -> Result<()> {
        if self.source.chunk_size == 0 {
            return Err(Error::config("source.chunk_size must be greater than zero"));
        }
        if self.retrieval.top_k == 0 {
            return Err(Error::config("retrieval.top_k must be greater than zero"));
        }
        if self.embeddings.batch_size == 0 {
            return Err(Error::config("embeddings.batch_size must be greater than zero"));
        }
        if self.backend == BackendProvider::OpenAi && self.openai.api_key.is_none() {
            return Err(Error::config(
                "OpenAI backend selected but no API key is set (openai.api_key or OPENAI_API_KEY)",
            ));
        }
        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// HTML page served at `/`
    pub index_page: PathBuf,
    /// Enable CORS
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            index_page: PathBuf::from("templates/index.html"),
            enable_cors: false,
        }
    }
}

/// Source document configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Path to the UTF-8 text file
    pub path: PathBuf,
    /// Chunk size in characters
    pub chunk_size: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("pdf_text2"),
            chunk_size: 3000,
        }
    }
}

/// Embedding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding model name (OpenAI backend)
    pub model: String,
    /// Inputs sent per embeddings request
    pub batch_size: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model: "text-embedding-ada-002".to_string(),
            batch_size: 1000,
        }
    }
}

/// Completion model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Completion model name (OpenAI backend)
    pub model: String,
    /// Sampling temperature (0 = deterministic)
    pub temperature: f32,
    /// Maximum tokens in the completion
    pub max_tokens: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo-instruct".to_string(),
            temperature: 0.0,
            max_tokens: 256,
            timeout_secs: 120,
        }
    }
}

/// OpenAI API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAiConfig {
    /// API base URL
    pub base_url: String,
    /// API key (falls back to OPENAI_API_KEY)
    pub api_key: Option<String>,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: None,
        }
    }
}

/// Ollama configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OllamaConfig {
    /// Ollama base URL
    pub base_url: String,
    /// Embedding model name
    pub embed_model: String,
    /// Generation model name
    pub generate_model: String,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            embed_model: "nomic-embed-text".to_string(),
            generate_model: "llama3.2:3b".to_string(),
        }
    }
}

/// Retrieval configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Number of chunks pulled into each prompt
    pub top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self { top_k: 3 }
    }
}

/// Backend provider selection
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BackendProvider {
    /// Hosted OpenAI embeddings and completions
    #[default]
    #[serde(rename = "openai")]
    OpenAi,
    /// Local Ollama server
    Ollama,
}
