//! LLM provider trait for text completion

use async_trait::async_trait;

use crate::config::LlmConfig;
use crate::error::Result;

/// Fixed sampling parameters for a completion call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionParams {
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: u32,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            temperature: 0.0,
            max_tokens: 256,
        }
    }
}

impl From<&LlmConfig> for CompletionParams {
    fn from(config: &LlmConfig) -> Self {
        Self {
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}

/// Trait for prompt completion
///
/// Implementations:
/// - `OpenAiLlm`: hosted OpenAI completions API
/// - `OllamaLlm`: local Ollama server
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Complete a prompt and return the generated text verbatim
    async fn complete(&self, prompt: &str, params: &CompletionParams) -> Result<String>;

    /// Get provider name for logging
    fn name(&self) -> &str;

    /// Get the model being used
    fn model(&self) -> &str;
}
