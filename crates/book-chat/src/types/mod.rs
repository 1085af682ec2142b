//! Core types for the book chat service

pub mod document;
pub mod query;
pub mod response;

pub use document::Chunk;
pub use query::ChatRequest;
pub use response::ChatResponse;
