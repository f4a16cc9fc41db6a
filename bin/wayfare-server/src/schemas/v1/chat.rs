//! Chat endpoint request / response types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use wayfare_agent::{Turn, TurnRole};

/// One role-tagged turn as held by the client.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TurnDto {
    /// `"user"` or `"ai"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl TurnDto {
    pub fn into_turn(self) -> Turn {
        match self.kind.as_str() {
            "user" => Turn::user(self.text),
            // Anything else (including legacy "assistant") is treated as an
            // ai turn rather than rejected.
            _ => Turn::ai(self.text),
        }
    }

    pub fn from_turn(turn: &Turn) -> Self {
        let kind = match turn.role {
            TurnRole::User => "user",
            TurnRole::Ai => "ai",
        };
        Self { kind: kind.into(), text: turn.text.clone() }
    }
}

/// Request body for `POST /v1/chat`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub message: String,
    /// Client-held rolling history, oldest first.
    #[serde(default)]
    pub history: Vec<TurnDto>,
    /// Client clock, passed through to the assistant's context.
    #[serde(rename = "currentDateTime")]
    pub current_date_time: Option<String>,
    #[serde(rename = "conversationId")]
    pub conversation_id: Option<String>,
}

/// Response body for `POST /v1/chat`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChatResponse {
    #[serde(rename = "aiResponse")]
    pub ai_response: String,
    /// Full updated history (input + user turn + ai turn).
    pub history: Vec<TurnDto>,
    #[serde(rename = "conversationId")]
    pub conversation_id: Option<String>,
}
