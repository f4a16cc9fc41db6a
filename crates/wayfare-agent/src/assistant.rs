//! The assistant tool loop.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::AgentError;
use crate::memory::{MemoryWindow, DEFAULT_WINDOW_EXCHANGES};
use crate::prompt;
use crate::provider::{ChatProvider, CompletionRequest, ToolSpec};
use crate::tool::Tool;
use crate::types::{ChatMessage, Turn, TurnRole};

/// Iteration cap so a tool-happy model cannot loop forever.
const MAX_TOOL_ITERATIONS: usize = 6;

/// Final reply plus the full updated turn history for the client.
#[derive(Debug, Clone)]
pub struct AssistantReply {
    pub text: String,
    pub history: Vec<Turn>,
}

/// Stateless per-request assistant: provider + persona + tools + window size.
pub struct Assistant {
    provider: Arc<dyn ChatProvider>,
    tools: Vec<Arc<dyn Tool>>,
    window_exchanges: usize,
}

impl Assistant {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self {
            provider,
            tools: Vec::new(),
            window_exchanges: DEFAULT_WINDOW_EXCHANGES,
        }
    }

    /// Register a capability the model may invoke.
    pub fn with_tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.push(tool);
        self
    }

    /// Override the memory window size (in exchanges).
    pub fn with_window(mut self, exchanges: usize) -> Self {
        self.window_exchanges = exchanges;
        self
    }

    /// Answer one user message given the prior turn history.
    ///
    /// The model decides per turn whether to call zero, one, or several tools
    /// before producing its final text. Tool errors are fed back to the model
    /// as the tool's own result string, never raised.
    pub async fn respond(
        &self,
        message: &str,
        history: &[Turn],
        current_datetime: &str,
    ) -> Result<AssistantReply, AgentError> {
        let window = MemoryWindow::from_history(history, self.window_exchanges);

        let mut messages = vec![ChatMessage::system(prompt::system_prompt(current_datetime))];
        for turn in window.turns() {
            messages.push(match turn.role {
                TurnRole::User => ChatMessage::user(turn.text.clone()),
                TurnRole::Ai => ChatMessage::assistant(turn.text.clone()),
            });
        }
        messages.push(ChatMessage::user(message));

        let specs: Vec<ToolSpec> = self
            .tools
            .iter()
            .map(|t| ToolSpec {
                name: t.name().to_owned(),
                description: t.description().to_owned(),
                parameters: t.parameters(),
            })
            .collect();

        for iteration in 0..MAX_TOOL_ITERATIONS {
            let reply = self
                .provider
                .complete(&CompletionRequest { messages: messages.clone(), tools: specs.clone() })
                .await?;

            if reply.tool_calls.is_empty() {
                debug!(iteration, reply_len = reply.text.len(), "assistant turn complete");
                let mut updated = history.to_vec();
                updated.push(Turn::user(message));
                updated.push(Turn::ai(reply.text.clone()));
                return Ok(AssistantReply { text: reply.text, history: updated });
            }

            // Echo the assistant's tool request, then answer each call.
            let payloads = reply.tool_calls.iter().map(|c| c.to_payload()).collect();
            let text = (!reply.text.is_empty()).then(|| reply.text.clone());
            messages.push(ChatMessage::assistant_tool_calls(text, payloads));

            for call in &reply.tool_calls {
                let result = match self.tools.iter().find(|t| t.name() == call.name) {
                    Some(tool) => match tool.call(&call.arguments).await {
                        Ok(out) => out,
                        Err(e) => {
                            warn!(tool = %call.name, error = %e, "tool call failed");
                            format!(
                                "The {} action could not be completed: {e}. \
                                 Apologise to the traveler and continue without it.",
                                call.name
                            )
                        }
                    },
                    None => {
                        warn!(tool = %call.name, "model requested unknown tool");
                        format!("No capability named '{}' is available.", call.name)
                    }
                };
                messages.push(ChatMessage::tool_result(call.id.clone(), result));
            }
        }

        Err(AgentError::ToolLoopExceeded(MAX_TOOL_ITERATIONS))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::provider::ProviderReply;
    use crate::types::{Role, ToolCall};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Provider that plays back a fixed sequence of replies and records the
    /// requests it saw.
    struct ScriptedProvider {
        replies: Mutex<Vec<ProviderReply>>,
        requests: Mutex<Vec<CompletionRequest>>,
    }

    impl ScriptedProvider {
        fn new(replies: Vec<ProviderReply>) -> Self {
            Self { replies: Mutex::new(replies), requests: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait]
    impl ChatProvider for ScriptedProvider {
        async fn complete(&self, request: &CompletionRequest) -> Result<ProviderReply, AgentError> {
            self.requests.lock().unwrap().push(request.clone());
            let mut replies = self.replies.lock().unwrap();
            if replies.is_empty() {
                return Err(AgentError::InvalidResponse("script exhausted".into()));
            }
            Ok(replies.remove(0))
        }
    }

    struct EchoTool {
        fail: bool,
    }

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }
        fn description(&self) -> &str {
            "Echoes its input"
        }
        fn parameters(&self) -> serde_json::Value {
            serde_json::json!({"type": "object", "properties": {"text": {"type": "string"}}})
        }
        async fn call(&self, args: &serde_json::Value) -> Result<String, AgentError> {
            if self.fail {
                return Err(AgentError::Tool { name: "echo".into(), message: "backend down".into() });
            }
            Ok(format!("echoed: {}", args["text"].as_str().unwrap_or("")))
        }
    }

    fn text_reply(text: &str) -> ProviderReply {
        ProviderReply { text: text.into(), tool_calls: vec![] }
    }

    fn tool_reply(name: &str, args: serde_json::Value) -> ProviderReply {
        ProviderReply {
            text: String::new(),
            tool_calls: vec![ToolCall { id: "call_1".into(), name: name.into(), arguments: args }],
        }
    }

    #[tokio::test]
    async fn plain_reply_appends_two_turns() {
        let provider = Arc::new(ScriptedProvider::new(vec![text_reply("hello there")]));
        let assistant = Assistant::new(provider.clone());

        let history = vec![Turn::user("hi"), Turn::ai("hello")];
        let reply = assistant.respond("plan me a trip", &history, "2026-08-30").await.unwrap();

        assert_eq!(reply.text, "hello there");
        assert_eq!(reply.history.len(), 4);
        assert_eq!(reply.history[2].text, "plan me a trip");
        assert_eq!(reply.history[3].role, TurnRole::Ai);
    }

    #[tokio::test]
    async fn tool_result_is_fed_back() {
        let provider = Arc::new(ScriptedProvider::new(vec![
            tool_reply("echo", serde_json::json!({"text": "jazz tonight"})),
            text_reply("There is jazz tonight."),
        ]));
        let assistant = Assistant::new(provider.clone()).with_tool(Arc::new(EchoTool { fail: false }));

        let reply = assistant.respond("what's on?", &[], "2026-08-30").await.unwrap();
        assert_eq!(reply.text, "There is jazz tonight.");

        // Second request must contain the tool-role result message.
        let requests = provider.requests.lock().unwrap();
        assert_eq!(requests.len(), 2);
        let tool_msg = requests[1]
            .messages
            .iter()
            .find(|m| m.role == Role::Tool)
            .expect("tool result message");
        assert_eq!(tool_msg.content.as_deref(), Some("echoed: jazz tonight"));
        assert_eq!(tool_msg.tool_call_id.as_deref(), Some("call_1"));
    }

    #[tokio::test]
    async fn tool_failure_is_narrated_not_raised() {
        let provider = Arc::new(ScriptedProvider::new(vec![
            tool_reply("echo", serde_json::json!({"text": "x"})),
            text_reply("Sorry, that did not work."),
        ]));
        let assistant = Assistant::new(provider.clone()).with_tool(Arc::new(EchoTool { fail: true }));

        let reply = assistant.respond("save it", &[], "2026-08-30").await.unwrap();
        assert_eq!(reply.text, "Sorry, that did not work.");

        let requests = provider.requests.lock().unwrap();
        let tool_msg = requests[1].messages.iter().find(|m| m.role == Role::Tool).unwrap();
        assert!(tool_msg.content.as_ref().unwrap().contains("could not be completed"));
    }

    #[tokio::test]
    async fn unknown_tool_is_reported_to_model() {
        let provider = Arc::new(ScriptedProvider::new(vec![
            tool_reply("teleport", serde_json::json!({})),
            text_reply("I can't do that."),
        ]));
        let assistant = Assistant::new(provider.clone());

        let reply = assistant.respond("teleport me", &[], "2026-08-30").await.unwrap();
        assert_eq!(reply.text, "I can't do that.");

        let requests = provider.requests.lock().unwrap();
        let tool_msg = requests[1].messages.iter().find(|m| m.role == Role::Tool).unwrap();
        assert!(tool_msg.content.as_ref().unwrap().contains("teleport"));
    }

    #[tokio::test]
    async fn endless_tool_requests_hit_the_cap() {
        let replies: Vec<ProviderReply> = (0..MAX_TOOL_ITERATIONS + 1)
            .map(|_| tool_reply("echo", serde_json::json!({"text": "again"})))
            .collect();
        let provider = Arc::new(ScriptedProvider::new(replies));
        let assistant = Assistant::new(provider).with_tool(Arc::new(EchoTool { fail: false }));

        let err = assistant.respond("loop", &[], "2026-08-30").await.unwrap_err();
        assert!(matches!(err, AgentError::ToolLoopExceeded(_)));
    }

    #[tokio::test]
    async fn long_history_is_windowed_but_echoed_in_full() {
        let provider = Arc::new(ScriptedProvider::new(vec![text_reply("ok")]));
        let assistant = Assistant::new(provider.clone()).with_window(2);

        let history: Vec<Turn> = (0..10)
            .flat_map(|n| [Turn::user(format!("q{n}")), Turn::ai(format!("a{n}"))])
            .collect();
        let reply = assistant.respond("latest", &history, "2026-08-30").await.unwrap();

        // Returned history is the full input plus the new exchange.
        assert_eq!(reply.history.len(), 22);

        // The provider only saw the system prompt, the last two exchanges,
        // and the new message.
        let requests = provider.requests.lock().unwrap();
        assert_eq!(requests[0].messages.len(), 1 + 4 + 1);
    }
}
