//! Turn history and provider wire types.

use serde::{Deserialize, Serialize};

/// Who produced a turn in the client-held history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Ai,
}

/// A single role-tagged history entry, `{"type": "user"|"ai", "text": …}`
/// on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    #[serde(rename = "type")]
    pub role: TurnRole,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: TurnRole::User, text: text.into() }
    }

    pub fn ai(text: impl Into<String>) -> Self {
        Self { role: TurnRole::Ai, text: text.into() }
    }
}

// ── Provider message types (OpenAI chat-completions shape) ────────────────────

/// Message author role sent to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// A tool invocation as serialized on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallPayload {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub function: FunctionPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionPayload {
    pub name: String,
    /// JSON-encoded argument object.
    pub arguments: String,
}

/// A chat message in the provider conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCallPayload>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl ChatMessage {
    pub fn system(text: impl Into<String>) -> Self {
        Self { role: Role::System, content: Some(text.into()), tool_calls: None, tool_call_id: None }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self { role: Role::User, content: Some(text.into()), tool_calls: None, tool_call_id: None }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: Some(text.into()), tool_calls: None, tool_call_id: None }
    }

    /// Assistant message carrying tool invocations (content may be empty).
    pub fn assistant_tool_calls(text: Option<String>, calls: Vec<ToolCallPayload>) -> Self {
        Self { role: Role::Assistant, content: text, tool_calls: Some(calls), tool_call_id: None }
    }

    /// Tool-role message feeding a result string back to the model.
    pub fn tool_result(call_id: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            role: Role::Tool,
            content: Some(result.into()),
            tool_calls: None,
            tool_call_id: Some(call_id.into()),
        }
    }
}

/// A parsed tool call requested by the model.
#[derive(Debug, Clone)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    pub arguments: serde_json::Value,
}

impl ToolCall {
    /// Convert back to the wire form for the assistant echo message.
    pub fn to_payload(&self) -> ToolCallPayload {
        ToolCallPayload {
            id: self.id.clone(),
            kind: "function".into(),
            function: FunctionPayload {
                name: self.name.clone(),
                arguments: self.arguments.to_string(),
            },
        }
    }
}
