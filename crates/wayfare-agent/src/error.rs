//! Agent error type.

use thiserror::Error;

/// All errors raised inside the assistant flow.
///
/// Tool failures deliberately do **not** surface through this type during a
/// turn: the tool loop converts them into narrated result strings so the
/// model can explain the failure. [`AgentError::Tool`] exists for the tool
/// implementations themselves to return.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Transport-level failure talking to the model provider.
    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success HTTP status.
    #[error("provider returned status {status}: {body}")]
    ProviderStatus { status: u16, body: String },

    /// The provider body could not be interpreted.
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),

    /// A tool refused or failed to execute.
    #[error("tool '{name}' failed: {message}")]
    Tool { name: String, message: String },

    /// The model kept requesting tools past the iteration cap.
    #[error("tool loop exceeded {0} iterations without a final reply")]
    ToolLoopExceeded(usize),
}
