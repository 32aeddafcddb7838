//! GitHub Integration Error Types

use projectboard_http::{HttpError, StatusCode};
use thiserror::Error;

/// Errors that can occur while fetching a project board
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Neither the fetcher nor the call supplied a project id
    #[error("No project id provided. Please provide a project id either in the constructor or as an argument.")]
    MissingProjectId,

    /// Network failure, non-2xx status, or undecodable response body
    #[error("GraphQL request failed: {0}")]
    Transport(#[from] HttpError),

    /// The payload did not have the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl GitHubError {
    /// Create a new malformed response error
    pub fn malformed(msg: impl Into<String>) -> Self {
        GitHubError::MalformedResponse(msg.into())
    }

    /// Create a new config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        GitHubError::ConfigError(msg.into())
    }

    /// Status code of a non-2xx GraphQL reply
    pub fn http_status(&self) -> Option<StatusCode> {
        match self {
            GitHubError::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// Whether the request ran into the configured timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, GitHubError::Transport(e) if e.is_timeout())
    }
}

/// Result type for GitHub operations
pub type Result<T> = std::result::Result<T, GitHubError>;
