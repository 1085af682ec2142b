//! Chat response types

use serde::{Deserialize, Serialize};

/// Body returned by `POST /chatbot`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Model answer, or the fixed error message
    pub response: String,
}

impl ChatResponse {
    /// Wrap an answer
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}
