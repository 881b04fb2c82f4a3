//! Tool-specific error types.

use thiserror::Error;

use crate::domains::nhl::NhlError;

/// Errors that can occur while executing a tool.
///
/// These never reach the transport: the dispatcher renders them as
/// `Error executing {tool}: {error}` text.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The arguments did not match the tool's input schema.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The upstream NHL API call failed.
    #[error(transparent)]
    Upstream(#[from] NhlError),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(err.to_string())
    }
}
