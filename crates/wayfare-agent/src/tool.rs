//! Side-effecting capabilities the model may invoke mid-turn.

use async_trait::async_trait;

use crate::error::AgentError;

/// A named capability the assistant can call before answering.
///
/// Implementations come in two flavours: persist (write a record somewhere)
/// and query (read and format data). Both share the same contract of a JSON
/// argument object in and a human-readable result string out, so the tool
/// loop can narrate failures instead of raising them.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Name the model uses to invoke this tool.
    fn name(&self) -> &str;

    /// Description shown to the model.
    fn description(&self) -> &str;

    /// JSON Schema of the argument object.
    fn parameters(&self) -> serde_json::Value;

    /// Execute with the model-supplied arguments.
    async fn call(&self, args: &serde_json::Value) -> Result<String, AgentError>;
}
