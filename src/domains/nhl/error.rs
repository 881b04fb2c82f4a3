//! Errors raised while talking to the NHL web API.

use thiserror::Error;

/// Result alias for NHL API operations.
pub type NhlResult<T> = std::result::Result<T, NhlError>;

/// Failure of a single upstream fetch.
///
/// Every variant is terminal: the client never retries.
#[derive(Debug, Error)]
pub enum NhlError {
    /// Connection failure, timeout, or body read error.
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream answered with a 4xx status.
    #[error("not found (HTTP {status}): {url}")]
    NotFound { status: u16, url: String },

    /// The upstream answered with any other non-2xx status.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// The body was not the JSON shape we expected.
    #[error("invalid JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl NhlError {
    /// Create a transport error for `url`.
    pub fn request(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Request {
            url: url.into(),
            source,
        }
    }

    /// Map a non-success status to the matching variant.
    pub fn from_status(status: u16, url: impl Into<String>) -> Self {
        let url = url.into();
        if (400..500).contains(&status) {
            Self::NotFound { status, url }
        } else {
            Self::Status { status, url }
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { status, .. } | Self::Status { status, .. } => Some(*status),
            Self::Request { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
