//! Errors raised while listing or reading NHL resources.

use thiserror::Error;

use crate::domains::nhl::NhlError;

#[derive(Debug, Error)]
pub enum ResourceError {
    /// No static resource or template matches the URI.
    #[error("Unknown resource: {0}")]
    NotFound(String),

    /// The URI fits a template but a segment is empty or not a valid id.
    #[error("Malformed resource URI: {0}")]
    InvalidUri(String),

    #[error("NHL API error: {0}")]
    Upstream(#[from] NhlError),

    #[error("Failed to encode resource body: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ResourceError {
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }

    pub fn invalid_uri(uri: impl Into<String>) -> Self {
        Self::InvalidUri(uri.into())
    }
}
