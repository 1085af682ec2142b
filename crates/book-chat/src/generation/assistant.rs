//! Question answering over the indexed book

use std::sync::Arc;

use crate::error::Result;
use crate::providers::{CompletionParams, LlmProvider};
use crate::retrieval::Retriever;

use super::prompt::PromptBuilder;

/// Returned to the user whenever retrieval or generation fails
pub const FALLBACK_RESPONSE: &str = "There was an error processing your request.";

/// Retrieves relevant text for a question and asks the completion model
pub struct BookAssistant {
    retriever: Retriever,
    llm: Arc<dyn LlmProvider>,
    params: CompletionParams,
}

impl BookAssistant {
    /// Create a new assistant
    pub fn new(retriever: Retriever, llm: Arc<dyn LlmProvider>, params: CompletionParams) -> Self {
        Self {
            retriever,
            llm,
            params,
        }
    }

    /// Answer a question. Never fails: errors are logged and replaced with
    /// [`FALLBACK_RESPONSE`].
    pub async fn answer(&self, question: &str) -> String {
        match self.try_answer(question).await {
            Ok(answer) => answer,
            Err(e) => {
                tracing::error!("An error occurred: {}", e);
                FALLBACK_RESPONSE.to_string()
            }
        }
    }

    /// Retrieve, compose and generate, propagating any failure
    pub async fn try_answer(&self, question: &str) -> Result<String> {
        let relevant_text = self.retriever.relevant_text(question).await?;
        let prompt = PromptBuilder::build_book_prompt(&relevant_text, question);
        self.llm.complete(&prompt, &self.params).await
    }
}
