//! Chat endpoint

use axum::{extract::State, Json};

use crate::generation::FALLBACK_RESPONSE;
use crate::server::state::AppState;
use crate::types::{ChatRequest, ChatResponse};

/// POST /chatbot - Answer a question about the book.
///
/// Always 200 for any JSON object body: a missing question is treated as
/// empty, a non-string one and any pipeline failure come back as the fixed
/// error message in `response`.
pub async fn chatbot(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let answer = match request.question_text() {
        Some(question) => {
            tracing::info!("Question: \"{}\"", question);
            state.assistant().answer(question).await
        }
        None => {
            tracing::error!("An error occurred: question is not a string: {:?}", request.question);
            FALLBACK_RESPONSE.to_string()
        }
    };

    Json(ChatResponse::new(answer))
}
