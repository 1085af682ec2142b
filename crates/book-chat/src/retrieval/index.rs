//! Exact nearest-neighbour index over chunk embeddings

use ndarray::{Array2, ArrayView1};

use crate::error::{Error, Result};
use crate::types::Chunk;

/// A chunk matched by a search, with its distance to the query
#[derive(Debug, Clone)]
pub struct SearchHit {
    /// The matched chunk
    pub chunk: Chunk,
    /// Squared Euclidean distance to the query (lower is more similar)
    pub distance: f32,
}

/// Flat (brute-force) L2 index. Built once, read-only afterwards.
pub struct SimilarityIndex {
    /// Chunks in document order; row `i` of `vectors` embeds `chunks[i]`
    chunks: Vec<Chunk>,
    /// One embedding per row
    vectors: Array2<f32>,
}

impl SimilarityIndex {
    /// Build an index from chunks and their embeddings, in matching order
    pub fn build(chunks: Vec<Chunk>, embeddings: Vec<Vec<f32>>) -> Result<Self> {
        if chunks.is_empty() {
            return Err(Error::index("Cannot build an index with no chunks"));
        }
        if chunks.len() != embeddings.len() {
            return Err(Error::index(format!(
                "Got {} embeddings for {} chunks",
                embeddings.len(),
                chunks.len()
            )));
        }

        let dimensions = embeddings[0].len();
        if dimensions == 0 {
            return Err(Error::index("Embeddings have zero dimensions"));
        }
        if let Some(pos) = embeddings.iter().position(|e| e.len() != dimensions) {
            return Err(Error::index(format!(
                "Embedding {} has {} dimensions, expected {}",
                pos,
                embeddings[pos].len(),
                dimensions
            )));
        }

        let flat: Vec<f32> = embeddings.into_iter().flatten().collect();
        let vectors = Array2::from_shape_vec((chunks.len(), dimensions), flat)
            .map_err(|e| Error::index(e.to_string()))?;

        Ok(Self { chunks, vectors })
    }

    /// Return up to `k` chunks nearest to `query`, closest first.
    ///
    /// No relevance threshold is applied, so any index with at least `k`
    /// chunks yields exactly `k` hits.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<SearchHit>> {
        if query.len() != self.dimensions() {
            return Err(Error::index(format!(
                "Query has {} dimensions, index has {}",
                query.len(),
                self.dimensions()
            )));
        }

        let query = ArrayView1::from(query);
        let mut scored: Vec<(usize, f32)> = self
            .vectors
            .rows()
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                let diff = &row - &query;
                (i, diff.dot(&diff))
            })
            .collect();

        scored.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        scored.truncate(k);

        Ok(scored
            .into_iter()
            .map(|(i, distance)| SearchHit {
                chunk: self.chunks[i].clone(),
                distance,
            })
            .collect())
    }

    /// Number of indexed chunks
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether the index holds no chunks (never true once built)
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Embedding dimensions
    pub fn dimensions(&self) -> usize {
        self.vectors.ncols()
    }

    /// Indexed chunks in document order
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunks(n: usize) -> Vec<Chunk> {
        (0..n).map(|i| Chunk::new(i, i * 10, format!("chunk {}", i))).collect()
    }

    #[test]
    fn test_search_orders_by_distance() {
        let index = SimilarityIndex::build(
            chunks(4),
            vec![
                vec![0.0, 0.0],
                vec![5.0, 5.0],
                vec![1.0, 1.0],
                vec![2.0, 2.0],
            ],
        )
        .unwrap();

        let hits = index.search(&[1.1, 1.1], 3).unwrap();
        let order: Vec<usize> = hits.iter().map(|h| h.chunk.index).collect();

        assert_eq!(order, vec![2, 3, 0]);
        assert!(hits[0].distance <= hits[1].distance);
        assert!(hits[1].distance <= hits[2].distance);
    }

    #[test]
    fn test_no_relevance_threshold() {
        let index = SimilarityIndex::build(
            chunks(5),
            (0..5).map(|i| vec![i as f32, 0.0]).collect(),
        )
        .unwrap();

        let hits = index.search(&[1.0e6, -1.0e6], 3).unwrap();
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn test_fewer_chunks_than_k() {
        let index = SimilarityIndex::build(chunks(2), vec![vec![1.0], vec![2.0]]).unwrap();
        assert_eq!(index.search(&[0.0], 3).unwrap().len(), 2);
    }

    #[test]
    fn test_ties_keep_document_order() {
        let index =
            SimilarityIndex::build(chunks(3), vec![vec![1.0], vec![1.0], vec![1.0]]).unwrap();
        let order: Vec<usize> = index
            .search(&[0.0], 3)
            .unwrap()
            .iter()
            .map(|h| h.chunk.index)
            .collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_build_rejects_bad_input() {
        assert!(SimilarityIndex::build(Vec::new(), Vec::new()).is_err());
        assert!(SimilarityIndex::build(chunks(2), vec![vec![1.0]]).is_err());
        assert!(SimilarityIndex::build(chunks(2), vec![vec![1.0], vec![1.0, 2.0]]).is_err());
        assert!(SimilarityIndex::build(chunks(1), vec![vec![]]).is_err());
    }

    #[test]
    fn test_query_dimension_mismatch() {
        let index = SimilarityIndex::build(chunks(1), vec![vec![1.0, 2.0]]).unwrap();
        assert!(matches!(index.search(&[1.0], 1), Err(Error::Index(_))));
    }
}
