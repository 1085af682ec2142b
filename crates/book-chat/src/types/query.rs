//! Chat request types

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of `POST /chatbot`
///
/// `question` is kept as raw JSON so that any object parses; the handler
/// decides what a `null` or non-string question means.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The question as sent. `None` when the field is absent.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub question: Option<Value>,
}

/// Keeps an explicit `null` distinct from a missing field
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl ChatRequest {
    /// Request with a text question
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: Some(Value::String(question.into())),
        }
    }

    /// The question text: `""` when absent, `None` when it is not a string
    pub fn question_text(&self) -> Option<&str> {
        match &self.question {
            None => Some(""),
            Some(Value::String(question)) => Some(question),
            Some(_) => None,
        }
    }
}
