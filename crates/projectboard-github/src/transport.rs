//! GraphQL transport
//!
//! One authenticated POST per call, no retries. Failures of any kind
//! (connection, non-2xx status, undecodable body) surface as
//! [`GitHubError::Transport`].

use std::sync::Arc;

use async_trait::async_trait;
use projectboard_http::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    shared_client, HttpClientTrait, HttpConfig, HttpError,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::errors::{GitHubError, Result};

/// Sends a GraphQL document and returns the decoded JSON reply
#[async_trait]
pub trait GraphQlTransport: Send + Sync {
    /// Send `query` authenticated with `auth_token`
    async fn send(&self, query: &str, auth_token: &str) -> Result<Value>;
}

/// GraphQL request body
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    /// GraphQL document
    pub query: &'a str,
}

/// Entry of a GraphQL `errors` array
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlError {
    /// Error message
    pub message: String,
    /// Error type reported by GitHub, e.g. `NOT_FOUND`
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Messages of the `errors` array of a GraphQL reply, if any
pub fn graphql_errors(response: &Value) -> Vec<GraphQlError> {
    response
        .get("errors")
        .cloned()
        .and_then(|errors| serde_json::from_value(errors).ok())
        .unwrap_or_default()
}

/// Transport over [`projectboard_http`]
pub struct HttpGraphQlTransport {
    client: Arc<dyn HttpClientTrait>,
    endpoint: String,
}

impl HttpGraphQlTransport {
    /// Create a transport with its own HTTP client
    pub fn new(endpoint: impl Into<String>, config: HttpConfig) -> Result<Self> {
        Ok(Self::with_client(endpoint, shared_client(config)?))
    }

    /// Create a transport over an existing client
    pub fn with_client(endpoint: impl Into<String>, client: Arc<dyn HttpClientTrait>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl GraphQlTransport for HttpGraphQlTransport {
    async fn send(&self, query: &str, auth_token: &str) -> Result<Value> {
        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", auth_token))
            .map_err(|e| HttpError::InvalidHeader(e.to_string()))?;
        headers.insert(AUTHORIZATION, bearer);

        let body = serde_json::to_value(GraphQlRequest { query })?;

        debug!(endpoint = %self.endpoint, query_len = query.len(), "Sending GraphQL request");
        let response = self
            .client
            .post_json(&self.endpoint, headers, &body)
            .await
            .map_err(GitHubError::Transport)?;

        Ok(response)
    }
}
