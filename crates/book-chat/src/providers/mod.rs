//! Provider abstractions for embeddings and completions
//!
//! This module provides trait-based abstractions that allow switching between
//! the hosted OpenAI API and a local Ollama server.

pub mod embedding;
pub mod llm;
pub mod ollama;
pub mod openai;

pub use embedding::EmbeddingProvider;
pub use llm::{CompletionParams, LlmProvider};
