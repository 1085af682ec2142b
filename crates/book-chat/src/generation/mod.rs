//! Prompt composition and answer generation

pub mod assistant;
pub mod prompt;

pub use assistant::{BookAssistant, FALLBACK_RESPONSE};
pub use prompt::PromptBuilder;
