//! Similarity index and question-time retrieval

pub mod index;
pub mod indexer;
pub mod retriever;

pub use index::{SearchHit, SimilarityIndex};
pub use indexer::build_index;
pub use retriever::Retriever;
