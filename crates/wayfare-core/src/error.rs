//! Error type shared across the Wayfare crates.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WayfareError>;

/// Failure taxonomy for the protocol adapter and its collaborators.
///
/// Every failure that crosses a crate boundary is one of these variants;
/// the dispatcher converts them into JSON-RPC error envelopes or terminal
/// task states, so nothing escapes to the transport layer unconverted.
#[derive(Debug, Error)]
pub enum WayfareError {
    /// The JSON-RPC envelope was malformed or required params were missing.
    #[error("invalid params: {0}")]
    InvalidParams(String),

    /// The request named a method outside the supported set.
    #[error("method not found: {0}")]
    MethodNotFound(String),

    /// The agent collaborator failed, timed out, or produced unusable output.
    #[error("agent invocation failed: {0}")]
    AgentFailure(String),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// An adapter invariant was violated.
    #[error("internal error: {0}")]
    Internal(String),
}
