use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use rihla_core::Language;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::reply::Reply;
use crate::state::AppState;

/// Longest text a chat message may carry.
const MAX_MESSAGE_CHARS: usize = 4096;

#[derive(Debug, Deserialize)]
pub struct InboundMessage {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct InboundAction {
    pub data: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RepliesResponse {
    pub replies: Vec<Reply>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub chat_id: i64,
    pub language: Option<Language>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/chats/{chat_id}/session", get(get_session))
        .route("/v1/chats/{chat_id}/messages", post(post_message))
        .route("/v1/chats/{chat_id}/actions", post(post_action))
}

/// POST /v1/chats/{chat_id}/messages
async fn post_message(
    State(state): State<AppState>,
    Path(chat_id): Path<i64>,
    Json(req): Json<InboundMessage>,
) -> Result<Json<RepliesResponse>, AppError> {
    if req.text.chars().count() > MAX_MESSAGE_CHARS {
        return Err(AppError::ValidationError(format!(
            "message exceeds {} characters",
            MAX_MESSAGE_CHARS
        )));
    }

    let replies = state.conversation.handle_message(chat_id, &req.text).await;
    Ok(Json(RepliesResponse { replies }))
}

/// POST /v1/chats/{chat_id}/actions
async fn post_action(
    State(state): State<AppState>,
    Path(chat_id): Path<i64>,
    Json(req): Json<InboundAction>,
) -> Json<RepliesResponse> {
    let replies = state.conversation.handle_action(chat_id, &req.data).await;
    Json(RepliesResponse { replies })
}

/// GET /v1/chats/{chat_id}/session
async fn get_session(
    State(state): State<AppState>,
    Path(chat_id): Path<i64>,
) -> Result<Json<SessionResponse>, AppError> {
    let language = state.conversation.language(chat_id).await?;
    Ok(Json(SessionResponse { chat_id, language }))
}
