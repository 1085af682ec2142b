//! Deterministic providers for unit tests

use async_trait::async_trait;
use std::sync::Mutex;

use crate::error::{Error, Result};
use crate::providers::{CompletionParams, EmbeddingProvider, LlmProvider};

/// Embeds text as its normalised a–z letter frequencies
pub struct LetterEmbedder;

#[async_trait]
impl EmbeddingProvider for LetterEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut counts = vec![0f32; 26];
        for c in text.chars().filter(|c| c.is_ascii_alphabetic()) {
            counts[(c.to_ascii_lowercase() as u8 - b'a') as usize] += 1.0;
        }
        let total: f32 = counts.iter().sum();
        if total > 0.0 {
            counts.iter_mut().for_each(|c| *c /= total);
        }
        Ok(counts)
    }

    fn name(&self) -> &str {
        "letters"
    }
}

/// Embedder that always fails
pub struct FailingEmbedder;

#[async_trait]
impl EmbeddingProvider for FailingEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
        Err(Error::embedding("embedding service unavailable"))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// LLM that records prompts and replies with a fixed answer
pub struct RecordingLlm {
    answer: String,
    prompts: Mutex<Vec<(String, CompletionParams)>>,
}

impl RecordingLlm {
    pub fn new(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, CompletionParams)> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for RecordingLlm {
    async fn complete(&self, prompt: &str, params: &CompletionParams) -> Result<String> {
        self.prompts
            .lock()
            .unwrap()
            .push((prompt.to_string(), *params));
        Ok(self.answer.clone())
    }

    fn name(&self) -> &str {
        "recording"
    }

    fn model(&self) -> &str {
        "recording-model"
    }
}

/// LLM that always fails
pub struct FailingLlm;

#[async_trait]
impl LlmProvider for FailingLlm {
    async fn complete(&self, _prompt: &str, _params: &CompletionParams) -> Result<String> {
        Err(Error::llm("Completion failed: HTTP 500"))
    }

    fn name(&self) -> &str {
        "failing"
    }

    fn model(&self) -> &str {
        "failing-model"
    }
}
