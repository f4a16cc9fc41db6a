//! Itinerary-assistant chat route.
//!
//! One stateless invocation per turn: the bounded memory window is rebuilt
//! from the client-supplied history, the assistant may call its tools, and
//! the final reply plus the full updated history are returned. When a
//! conversation is active the user and ai turns are appended to it.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use tracing::{debug, info, warn};
use utoipa::OpenApi;
use uuid::Uuid;

use wayfare_agent::Turn;

use crate::entities::{Conversation, ConversationStore, Message, MessageStore};
use crate::error::ServerError;
use crate::schemas::v1::chat::{ChatRequest, ChatResponse, TurnDto};
use crate::state::AppState;

/// Maximum allowed message length in bytes to prevent memory exhaustion.
const MAX_MESSAGE_BYTES: usize = 32 * 1024; // 32 KiB

/// Conversation titles are clipped to this many characters.
const MAX_TITLE_CHARS: usize = 80;

#[derive(OpenApi)]
#[openapi(paths(chat), components(schemas(ChatRequest, ChatResponse, TurnDto)))]
pub struct ChatApi;

/// Register the chat route.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/chat", post(chat))
}

/// One assistant turn (`POST /v1/chat`).
#[utoipa::path(
    post,
    path = "/v1/chat",
    tag = "chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant replied", body = ChatResponse),
        (status = 400, description = "Missing message"),
        (status = 404, description = "Unknown conversation"),
        (status = 500, description = "Assistant or store error"),
    )
)]
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ServerError> {
    // Validation happens before any store write so a bad request leaves no
    // trace in the database.
    let message = req.message.trim();
    if message.is_empty() {
        return Err(ServerError::BadRequest("message is required".into()));
    }
    if message.len() > MAX_MESSAGE_BYTES {
        return Err(ServerError::BadRequest(format!(
            "message too large ({} bytes); maximum is {} bytes",
            message.len(),
            MAX_MESSAGE_BYTES,
        )));
    }

    // A supplied conversation id must refer to a real conversation.
    if let Some(cid) = req.conversation_id.as_deref() {
        state
            .store
            .get_conversation(cid)
            .await?
            .ok_or_else(|| ServerError::NotFound(format!("conversation {cid} not found")))?;
    }

    let history: Vec<Turn> = req.history.into_iter().map(TurnDto::into_turn).collect();
    let now = Utc::now();
    let current_datetime = req
        .current_date_time
        .unwrap_or_else(|| now.to_rfc3339());

    debug!(
        history_len = history.len(),
        conversation_id = ?req.conversation_id,
        "assistant turn requested"
    );

    let reply = state
        .assistant
        .respond(message, &history, &current_datetime)
        .await?;

    info!(reply_len = reply.text.len(), "assistant turn complete");

    // Create the conversation on the first exchange when no id was supplied.
    let conversation_id = match req.conversation_id {
        Some(cid) => Some(cid),
        None => {
            let conversation = Conversation {
                id: Uuid::new_v4().to_string(),
                user_id: None,
                title: title_from_message(message),
                created_at: now,
                updated_at: now,
            };
            match state.store.create_conversation(conversation.clone()).await {
                Ok(()) => Some(conversation.id),
                Err(e) => {
                    warn!(error = %e, "failed to create conversation");
                    None
                }
            }
        }
    };

    // Persist both turns. Failures here are logged but do not fail the
    // request; the client already has the reply.
    if let Some(cid) = conversation_id.as_deref() {
        append_turn(&state, cid, "user", message).await;
        append_turn(&state, cid, "ai", &reply.text).await;
        state
            .store
            .touch_conversation(cid)
            .await
            .unwrap_or_else(|e| warn!(error = %e, "failed to touch conversation"));
    }

    Ok(Json(ChatResponse {
        ai_response: reply.text,
        history: reply.history.iter().map(TurnDto::from_turn).collect(),
        conversation_id,
    }))
}

async fn append_turn(state: &AppState, conversation_id: &str, sender: &str, content: &str) {
    let msg = Message {
        id: Uuid::new_v4().to_string(),
        conversation_id: conversation_id.to_owned(),
        sender: sender.to_owned(),
        content: content.to_owned(),
        created_at: Utc::now(),
    };
    state
        .store
        .append_message(msg)
        .await
        .unwrap_or_else(|e| warn!(sender, error = %e, "failed to persist message"));
}

/// Derive a conversation title from the leading words of the first message.
fn title_from_message(message: &str) -> String {
    let title: String = message.split_whitespace().take(8).collect::<Vec<_>>().join(" ");
    if title.chars().count() > MAX_TITLE_CHARS {
        title.chars().take(MAX_TITLE_CHARS).collect()
    } else {
        title
    }
}
