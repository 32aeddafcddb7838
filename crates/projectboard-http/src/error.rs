//! HTTP client error types

use thiserror::Error;

/// Result type for HTTP operations
pub type Result<T> = std::result::Result<T, HttpError>;

/// HTTP client errors
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network request failed
    #[error("Network request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid proxy configuration
    #[error("Invalid proxy configuration: {0}")]
    InvalidProxy(String),

    /// Invalid header value
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    /// HTTP error status
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        status: reqwest::StatusCode,
        message: String,
    },

    /// Response body was not valid JSON
    #[error("Invalid JSON response: {0}")]
    InvalidJson(String),

    /// Client build error
    #[error("Failed to build HTTP client: {0}")]
    BuildError(String),
}

impl HttpError {
    /// Check if the request ran into the configured timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, HttpError::RequestFailed(e) if e.is_timeout())
    }

    /// Status code of a non-2xx response, if that is what failed
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            HttpError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accessor() {
        let err = HttpError::HttpStatus {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            message: "boom".to_string(),
        };
        assert_eq!(err.status(), Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
        assert!(HttpError::InvalidUrl("x".to_string()).status().is_none());
    }

    #[test]
    fn test_display_includes_status() {
        let err = HttpError::HttpStatus {
            status: reqwest::StatusCode::UNAUTHORIZED,
            message: "Bad credentials".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 401 Unauthorized: Bad credentials");
    }
}
