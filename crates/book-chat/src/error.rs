//! Error types for the book chat service

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for book chat operations
pub type Result<T> = std::result::Result<T, Error>;

/// Book chat errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Source text file does not exist
    #[error("The source text file '{}' was not found", .0.display())]
    SourceNotFound(PathBuf),

    /// Source text file is not valid UTF-8
    #[error("Could not decode '{}'. Please ensure it is encoded in UTF-8", .0.display())]
    InvalidEncoding(PathBuf),

    /// Source text produced no chunks to index
    #[error("The source text file '{}' is empty", .0.display())]
    EmptyDocument(PathBuf),

    /// Embedding error
    #[error("Embedding generation failed: {0}")]
    Embedding(String),

    /// Similarity index error
    #[error("Similarity index error: {0}")]
    Index(String),

    /// Completion model error
    #[error("LLM error: {0}")]
    Llm(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an embedding error
    pub fn embedding(message: impl Into<String>) -> Self {
        Self::Embedding(message.into())
    }

    /// Create an index error
    pub fn index(message: impl Into<String>) -> Self {
        Self::Index(message.into())
    }

    /// Create an LLM error
    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
