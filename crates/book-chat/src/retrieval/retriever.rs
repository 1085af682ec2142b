//! Question-time retrieval of relevant document text

use std::sync::Arc;

use crate::error::Result;
use crate::providers::EmbeddingProvider;

use super::index::{SearchHit, SimilarityIndex};

/// Embeds questions and looks up the nearest chunks
pub struct Retriever {
    embedder: Arc<dyn EmbeddingProvider>,
    index: Arc<SimilarityIndex>,
    top_k: usize,
}

impl Retriever {
    /// Create a retriever. `embedder` must be the provider that embedded the index.
    pub fn new(
        embedder: Arc<dyn EmbeddingProvider>,
        index: Arc<SimilarityIndex>,
        top_k: usize,
    ) -> Self {
        Self {
            embedder,
            index,
            top_k,
        }
    }

    /// Nearest chunks for a question, most similar first
    pub async fn search(&self, question: &str) -> Result<Vec<SearchHit>> {
        let query_embedding = self.embedder.embed(question).await?;
        self.index.search(&query_embedding, self.top_k)
    }

    /// Text of the nearest chunks joined by single spaces, in similarity order
    pub async fn relevant_text(&self, question: &str) -> Result<String> {
        let hits = self.search(question).await?;
        tracing::debug!(
            "Retrieved chunks {:?}",
            hits.iter().map(|h| h.chunk.index).collect::<Vec<_>>()
        );

        Ok(hits
            .iter()
            .map(|h| h.chunk.content.as_str())
            .collect::<Vec<_>>()
            .join(" "))
    }
}
