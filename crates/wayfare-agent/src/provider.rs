//! Chat provider abstraction and the OpenAI-compatible implementation.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::AgentError;
use crate::types::{ChatMessage, ToolCall};

/// Tool definition advertised to the model.
#[derive(Debug, Clone)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

/// One completion request: full message context plus the available tools.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub tools: Vec<ToolSpec>,
}

/// What the model answered: final text, tool invocations, or both.
#[derive(Debug, Clone)]
pub struct ProviderReply {
    pub text: String,
    pub tool_calls: Vec<ToolCall>,
}

/// Trait over the hosted LLM. Tests swap in scripted implementations.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<ProviderReply, AgentError>;
}

// ── OpenAI-compatible implementation ─────────────────────────────────────────

/// Chat-completions client for any OpenAI-compatible endpoint.
pub struct OpenAiProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiProvider {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    fn build_body(&self, request: &CompletionRequest) -> serde_json::Value {
        let mut body = serde_json::json!({
            "model": self.model,
            "messages": request.messages,
        });
        if !request.tools.is_empty() {
            let tools: Vec<serde_json::Value> = request
                .tools
                .iter()
                .map(|t| {
                    serde_json::json!({
                        "type": "function",
                        "function": {
                            "name": t.name,
                            "description": t.description,
                            "parameters": t.parameters,
                        }
                    })
                })
                .collect();
            if let Some(obj) = body.as_object_mut() {
                obj.insert("tools".into(), tools.into());
            }
        }
        body
    }
}

#[derive(Deserialize)]
struct CompletionBody {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
    #[serde(default)]
    tool_calls: Vec<WireToolCall>,
}

#[derive(Deserialize)]
struct WireToolCall {
    id: String,
    function: WireFunction,
}

#[derive(Deserialize)]
struct WireFunction {
    name: String,
    /// JSON-encoded argument object.
    arguments: String,
}

#[async_trait]
impl ChatProvider for OpenAiProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<ProviderReply, AgentError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        debug!(model = %self.model, messages = request.messages.len(), "chat completion request");

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&self.build_body(request))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AgentError::ProviderStatus { status: status.as_u16(), body });
        }

        let body: CompletionBody = resp
            .json()
            .await
            .map_err(|e| AgentError::InvalidResponse(e.to_string()))?;

        let choice = body
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AgentError::InvalidResponse("no choices in completion".into()))?;

        let tool_calls = choice
            .message
            .tool_calls
            .into_iter()
            .map(|c| {
                // Some providers send malformed argument JSON; keep the raw
                // string so the tool can still see what was asked.
                let arguments = serde_json::from_str(&c.function.arguments)
                    .unwrap_or(serde_json::Value::String(c.function.arguments));
                ToolCall { id: c.id, name: c.function.name, arguments }
            })
            .collect();

        Ok(ProviderReply {
            text: choice.message.content.unwrap_or_default(),
            tool_calls,
        })
    }
}
