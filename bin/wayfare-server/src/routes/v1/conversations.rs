use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use utoipa::OpenApi;
use uuid::Uuid;

use crate::entities::{Conversation, ConversationStore, MessageStore};
use crate::error::ServerError;
use crate::schemas::v1::conversations::{
    ConversationResponse, ConversationWithMessages, CreateConversationRequest, MessageResponse,
};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(list_conversations, get_conversation, create_conversation),
    components(schemas(
        CreateConversationRequest,
        ConversationResponse,
        ConversationWithMessages,
        MessageResponse
    ))
)]
pub struct ConversationsApi;

/// Register conversation routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/conversations", get(list_conversations).post(create_conversation))
        .route("/conversations/{id}", get(get_conversation))
}

#[utoipa::path(
    get,
    path = "/v1/conversations",
    tag = "conversations",
    responses(
        (status = 200, description = "Conversation list retrieved", body = Vec<ConversationResponse>),
        (status = 500, description = "Store error"),
    )
)]
pub async fn list_conversations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ConversationResponse>>, ServerError> {
    let conversations = state.store.list_conversations().await?;
    Ok(Json(conversations.iter().map(|c| c.to_response()).collect()))
}

#[utoipa::path(
    get,
    path = "/v1/conversations/{id}",
    tag = "conversations",
    responses(
        (status = 200, description = "Conversation with messages", body = ConversationWithMessages),
        (status = 404, description = "Unknown conversation"),
        (status = 500, description = "Store error"),
    )
)]
pub async fn get_conversation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ConversationWithMessages>, ServerError> {
    let conversation = state
        .store
        .get_conversation(&id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("conversation {id} not found")))?;
    let messages = state.store.list_messages(&id).await?;
    Ok(Json(ConversationWithMessages {
        conversation: conversation.to_response(),
        messages: messages.iter().map(|m| m.to_response()).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/v1/conversations",
    tag = "conversations",
    request_body = CreateConversationRequest,
    responses(
        (status = 200, description = "Conversation created", body = ConversationResponse),
        (status = 400, description = "Missing title"),
        (status = 500, description = "Store error"),
    )
)]
pub async fn create_conversation(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateConversationRequest>,
) -> Result<Json<ConversationResponse>, ServerError> {
    if req.title.trim().is_empty() {
        return Err(ServerError::BadRequest("title is required".into()));
    }
    let now = Utc::now();
    let conversation = Conversation {
        id: Uuid::new_v4().to_string(),
        user_id: None,
        title: req.title.trim().to_owned(),
        created_at: now,
        updated_at: now,
    };
    state.store.create_conversation(conversation.clone()).await?;
    Ok(Json(conversation.to_response()))
}
