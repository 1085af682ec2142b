//! Startup index construction

use crate::error::Result;
use crate::ingestion::FixedSizeChunker;
use crate::providers::EmbeddingProvider;

use super::index::SimilarityIndex;

/// Chunk the document, embed every chunk and build the similarity index
pub async fn build_index(
    text: &str,
    chunker: &FixedSizeChunker,
    embedder: &dyn EmbeddingProvider,
) -> Result<SimilarityIndex> {
    let chunks = chunker.chunk(text);
    tracing::info!(
        "Split document into {} chunks of up to {} characters",
        chunks.len(),
        chunker.chunk_size()
    );

    let texts: Vec<String> = chunks.iter().map(|c| c.content.clone()).collect();
    let embeddings = embedder.embed_batch(&texts).await?;

    let index = SimilarityIndex::build(chunks, embeddings)?;
    tracing::info!(
        "Similarity index built ({} vectors, {} dimensions, embedder: {})",
        index.len(),
        index.dimensions(),
        embedder.name()
    );

    Ok(index)
}
