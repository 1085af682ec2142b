//! Fixed-size text chunking

use crate::error::{Error, Result};
use crate::types::Chunk;

/// Splits text into contiguous, non-overlapping slices of `chunk_size`
/// characters. The last chunk may be shorter.
#[derive(Debug, Clone, Copy)]
pub struct FixedSizeChunker {
    /// Chunk size in characters
    chunk_size: usize,
}

impl FixedSizeChunker {
    /// Create a new chunker. A zero `chunk_size` is a configuration error.
    pub fn new(chunk_size: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(Error::config("chunk_size must be greater than 0"));
        }
        Ok(Self { chunk_size })
    }

    /// Chunk size in characters
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Chunk text in document order
    pub fn chunk(&self, text: &str) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        let mut start_byte = 0usize;
        let mut char_start = 0usize;

        while start_byte < text.len() {
            // Byte offset just past `chunk_size` characters, or end of text
            let end_byte = text[start_byte..]
                .char_indices()
                .nth(self.chunk_size)
                .map_or(text.len(), |(offset, _)| start_byte + offset);

            chunks.push(Chunk::new(
                chunks.len(),
                char_start,
                &text[start_byte..end_byte],
            ));

            char_start += self.chunk_size;
            start_byte = end_byte;
        }

        chunks
    }
}

impl Default for FixedSizeChunker {
    fn default() -> Self {
        Self { chunk_size: 3000 }
    }
}
