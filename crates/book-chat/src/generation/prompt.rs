//! Prompt templates for book questions

/// Instruction template. `{question}` is replaced with the literal question.
pub const BOOK_ASSISTANT_TEMPLATE: &str = concat!(
    "\n",
    "You are an assistant specialized in providing insights and explanations based on the book 'The Mountain Is You' by Brianna Wiest. \n",
    "Your role is to discuss the book's themes, concepts, and teachings, including personal growth, emotional transformation, and overcoming self-sabotage. \n",
    "If a question is not related to the book, respond with, \"I can't assist you with that, sorry!\" \n",
    "Question: {question} \n",
    "Answer: \n",
);

/// Prompt builder for book queries
pub struct PromptBuilder;

impl PromptBuilder {
    /// Retrieved text followed directly by the instruction template.
    ///
    /// Only the template's placeholder is substituted; braces inside the
    /// retrieved text or the question are passed through untouched.
    pub fn build_book_prompt(relevant_text: &str, question: &str) -> String {
        let instructions = BOOK_ASSISTANT_TEMPLATE.replacen("{question}", question, 1);
        let mut prompt = String::with_capacity(relevant_text.len() + instructions.len());
        prompt.push_str(relevant_text);
        prompt.push_str(&instructions);
        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_precedes_instructions() {
        let prompt = PromptBuilder::build_book_prompt("chunk one chunk two", "Why hike?");

        assert!(prompt.starts_with("chunk one chunk two\nYou are an assistant specialized"));
        assert!(prompt.ends_with("Question: Why hike? \nAnswer: \n"));
    }

    #[test]
    fn test_braces_are_literal() {
        let prompt = PromptBuilder::build_book_prompt("a {question} in the text", "{x}");

        assert!(prompt.starts_with("a {question} in the text\n"));
        assert!(prompt.contains("Question: {x} \n"));
    }

    #[test]
    fn test_empty_question() {
        let prompt = PromptBuilder::build_book_prompt("", "");
        assert_eq!(prompt, BOOK_ASSISTANT_TEMPLATE.replace("{question}", ""));
    }

    #[test]
    fn test_template_is_not_mutated() {
        let first = PromptBuilder::build_book_prompt("first context", "first?");
        let second = PromptBuilder::build_book_prompt("second context", "second?");

        assert!(!second.contains("first"));
        assert!(first.contains("first?"));
        assert!(BOOK_ASSISTANT_TEMPLATE.contains("{question}"));
    }
}
