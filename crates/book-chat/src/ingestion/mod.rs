//! Source document loading and chunking

pub mod chunker;
pub mod loader;

pub use chunker::FixedSizeChunker;
pub use loader::load_document;
