//! Transport error types.

use thiserror::Error;

pub type TransportResult<T> = Result<T, TransportError>;

/// Failures that stop a transport from serving.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("could not listen on {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The client never completed the MCP `initialize` exchange.
    #[error("MCP handshake failed: {0}")]
    Handshake(String),

    #[error("HTTP server stopped: {0}")]
    Http(String),

    /// The rmcp session ended with an error instead of a clean close.
    #[error("MCP session failed: {0}")]
    Session(String),
}

impl TransportError {
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }

    pub fn handshake(msg: impl ToString) -> Self {
        Self::Handshake(msg.to_string())
    }

    pub fn http(msg: impl ToString) -> Self {
        Self::Http(msg.to_string())
    }

    pub fn session(msg: impl ToString) -> Self {
        Self::Session(msg.to_string())
    }
}
