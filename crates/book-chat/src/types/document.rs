//! Document chunk type

use serde::{Deserialize, Serialize};

/// A contiguous slice of the source document used as a retrieval unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Position of the chunk in document order
    pub index: usize,
    /// Character offset of the first character in the document
    pub char_start: usize,
    /// Chunk text
    pub content: String,
}

impl Chunk {
    /// Create a new chunk
    pub fn new(index: usize, char_start: usize, content: impl Into<String>) -> Self {
        Self {
            index,
            char_start,
            content: content.into(),
        }
    }

    /// Length of the chunk in characters
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }
}
