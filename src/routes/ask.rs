use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use tracing::{debug, info, warn};

use crate::models::{AppState, AskRequest, AskResponse};
use crate::types::AppResult;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ask", post(ask_question))
        .with_state(state)
}

/// POST /ask - Answer a question about the uploaded PDF
///
/// The conversation is only extended once the model has answered; any
/// failure leaves the session exactly as it was.
async fn ask_question(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> AppResult<Json<AskResponse>> {
    // An unreadable body is handled like an empty question
    let request = payload.map(|Json(request)| request).unwrap_or_else(|rejection| {
        debug!(error = %rejection, "Ask body is not valid JSON");
        AskRequest::default()
    });
    let question = request.question.trim().to_string();
    info!(question_len = question.len(), "Received question");

    let (messages, generation) = {
        let session = state.session.read().await;
        let messages = state.assembler.assemble(&session, &question)?;
        (messages, session.generation())
    };

    let answer = state.llm.create_chat_completion(&messages).await?;

    let mut session = state.session.write().await;
    if session.generation() == generation {
        session.record_exchange(question, answer.clone());
        debug!(history_len = session.history().len(), "Conversation extended");
    } else {
        warn!("A new PDF was uploaded while the question was in flight, answer not recorded");
    }

    Ok(Json(AskResponse { answer }))
}
