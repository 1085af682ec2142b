//! book-chat: question answering over a single book
//!
//! The source text is split into fixed-size chunks and embedded once at
//! startup. Each question is embedded, matched against the chunks, and the
//! nearest chunks are prepended to an instruction prompt sent to a
//! completion model. The answer is served through a two-route HTTP API.

pub mod config;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod providers;
pub mod retrieval;
pub mod server;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::ChatConfig;
pub use error::{Error, Result};
pub use types::{ChatRequest, ChatResponse, Chunk};
