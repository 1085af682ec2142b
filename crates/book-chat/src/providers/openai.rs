//! OpenAI providers for embeddings and completions

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::config::ChatConfig;
use crate::error::{Error, Result};

use super::embedding::EmbeddingProvider;
use super::llm::{CompletionParams, LlmProvider};

/// OpenAI REST API client
pub struct OpenAiClient {
    /// HTTP client
    client: Client,
    /// API base URL, without trailing slash
    base_url: String,
    /// Bearer token
    api_key: String,
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
    #[serde(default)]
    index: usize,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    text: String,
}

impl OpenAiClient {
    /// Create a new client
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(5)
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Create from service configuration
    pub fn from_config(config: &ChatConfig) -> Result<Self> {
        let api_key = config
            .openai
            .api_key
            .as_deref()
            .ok_or_else(|| Error::config("OpenAI API key is not set"))?;
        Self::new(
            &config.openai.base_url,
            api_key,
            Duration::from_secs(config.llm.timeout_secs),
        )
    }

    /// Embed a batch of texts in one request, preserving input order
    pub async fn embed(&self, model: &str, input: &[String]) -> Result<Vec<Vec<f32>>> {
        let url = format!("{}/embeddings", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&EmbeddingRequest { model, input })
            .send()
            .await
            .map_err(|e| Error::embedding(format!("Embedding request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::embedding(format!(
                "Embedding failed: HTTP {} - {}",
                status, body
            )));
        }

        let mut parsed: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| Error::embedding(format!("Failed to parse embedding response: {}", e)))?;

        if parsed.data.len() != input.len() {
            return Err(Error::embedding(format!(
                "Expected {} embeddings, got {}",
                input.len(),
                parsed.data.len()
            )));
        }

        parsed.data.sort_by_key(|d| d.index);
        Ok(parsed.data.into_iter().map(|d| d.embedding).collect())
    }

    /// Complete a prompt with the legacy completions endpoint
    pub async fn complete(
        &self,
        model: &str,
        prompt: &str,
        params: &CompletionParams,
    ) -> Result<String> {
        let url = format!("{}/completions", self.base_url);

        let request = CompletionRequest {
            model,
            prompt,
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::llm(format!("Completion request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::llm(format!(
                "Completion failed: HTTP {} - {}",
                status, body
            )));
        }

        let parsed: CompletionResponse = response
            .json()
            .await
            .map_err(|e| Error::llm(format!("Failed to parse completion response: {}", e)))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.text)
            .ok_or_else(|| Error::llm("Empty response from OpenAI"))
    }
}

/// OpenAI embedding provider
pub struct OpenAiEmbedder {
    client: Arc<OpenAiClient>,
    model: String,
    batch_size: usize,
}

impl OpenAiEmbedder {
    /// Create from a shared client
    pub fn from_client(client: Arc<OpenAiClient>, model: String, batch_size: usize) -> Self {
        Self {
            client,
            model,
            batch_size: batch_size.max(1),
        }
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAiEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let input = [text.to_string()];
        self.client
            .embed(&self.model, &input)
            .await?
            .pop()
            .ok_or_else(|| Error::embedding("Empty embedding response"))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let mut embeddings = Vec::with_capacity(texts.len());
        for batch in texts.chunks(self.batch_size) {
            tracing::debug!("Embedding batch of {} texts", batch.len());
            embeddings.extend(self.client.embed(&self.model, batch).await?);
        }
        Ok(embeddings)
    }

    fn name(&self) -> &str {
        "openai"
    }
}

/// OpenAI completion provider
pub struct OpenAiLlm {
    client: Arc<OpenAiClient>,
    model: String,
}

impl OpenAiLlm {
    /// Create from a shared client
    pub fn from_client(client: Arc<OpenAiClient>, model: String) -> Self {
        Self { client, model }
    }
}

#[async_trait]
impl LlmProvider for OpenAiLlm {
    async fn complete(&self, prompt: &str, params: &CompletionParams) -> Result<String> {
        tracing::info!("Generating answer with model: {}", self.model);
        self.client.complete(&self.model, prompt, params).await
    }

    fn name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn client(server: &mockito::ServerGuard) -> Arc<OpenAiClient> {
        Arc::new(OpenAiClient::new(&server.url(), "sk-test", Duration::from_secs(5)).unwrap())
    }

    #[tokio::test]
    async fn test_embed_orders_by_index() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/embeddings")
            .match_header("authorization", "Bearer sk-test")
            .match_body(Matcher::PartialJson(json!({
                "model": "text-embedding-ada-002",
                "input": ["first", "second"]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "object": "list",
                    "data": [
                        { "object": "embedding", "index": 1, "embedding": [0.0, 1.0] },
                        { "object": "embedding", "index": 0, "embedding": [1.0, 0.0] }
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let embedder =
            OpenAiEmbedder::from_client(client(&server), "text-embedding-ada-002".into(), 10);
        let vectors = embedder
            .embed_batch(&["first".to_string(), "second".to_string()])
            .await
            .unwrap();

        assert_eq!(vectors, vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_embed_batch_splits_requests() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/embeddings")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "data": [{ "index": 0, "embedding": [0.5] }] }).to_string())
            .expect(3)
            .create_async()
            .await;

        let embedder = OpenAiEmbedder::from_client(client(&server), "m".into(), 1);
        let texts: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let vectors = embedder.embed_batch(&texts).await.unwrap();

        assert_eq!(vectors.len(), 3);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_embed_count_mismatch() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/embeddings")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "data": [] }).to_string())
            .create_async()
            .await;

        let embedder = OpenAiEmbedder::from_client(client(&server), "m".into(), 10);
        let err = embedder.embed("question").await.unwrap_err();
        assert!(matches!(err, Error::Embedding(_)));
    }

    #[tokio::test]
    async fn test_complete_sends_fixed_parameters() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/completions")
            .match_header("authorization", "Bearer sk-test")
            .match_body(Matcher::PartialJson(json!({
                "model": "gpt-3.5-turbo-instruct",
                "prompt": "Question: hi",
                "temperature": 0.0,
                "max_tokens": 256
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({ "choices": [{ "text": " The book is about growth.", "index": 0 }] })
                    .to_string(),
            )
            .create_async()
            .await;

        let llm = OpenAiLlm::from_client(client(&server), "gpt-3.5-turbo-instruct".into());
        let text = llm
            .complete("Question: hi", &CompletionParams::default())
            .await
            .unwrap();

        assert_eq!(text, " The book is about growth.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_complete_http_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/completions")
            .with_status(401)
            .with_body("invalid api key")
            .create_async()
            .await;

        let llm = OpenAiLlm::from_client(client(&server), "m".into());
        let err = llm
            .complete("prompt", &CompletionParams::default())
            .await
            .unwrap_err();

        match err {
            Error::Llm(message) => {
                assert!(message.contains("401"));
                assert!(message.contains("invalid api key"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_complete_without_choices() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "choices": [] }).to_string())
            .create_async()
            .await;

        let llm = OpenAiLlm::from_client(client(&server), "m".into());
        assert!(llm.complete("prompt", &CompletionParams::default()).await.is_err());
    }
}
