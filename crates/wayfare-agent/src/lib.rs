//! Conversational itinerary assistant.
//!
//! The assistant is stateless: every call rebuilds a bounded memory window
//! from the caller-supplied turn history, injects a fixed persona prompt, and
//! drives a tool loop against a [`provider::ChatProvider`]. Tools are small
//! side-effecting capabilities (persist an itinerary, query events) whose
//! failures are narrated back to the model as plain strings rather than
//! raised.

pub mod assistant;
pub mod error;
pub mod memory;
pub mod prompt;
pub mod provider;
pub mod tool;
pub mod types;

pub use assistant::{Assistant, AssistantReply};
pub use error::AgentError;
pub use memory::MemoryWindow;
pub use provider::{ChatProvider, CompletionRequest, OpenAiProvider, ProviderReply, ToolSpec};
pub use tool::Tool;
pub use types::{Turn, TurnRole};
