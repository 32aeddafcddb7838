//! Fetcher configuration

use std::time::Duration;

use projectboard_http::HttpConfig;
use serde::{Deserialize, Serialize};

use crate::errors::{GitHubError, Result};

/// GitHub's public GraphQL endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";

/// Configuration injected into a [`crate::ProjectFetcher`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Bearer token sent with every request. Not validated locally; an empty
    /// token is sent as-is and rejected by GitHub.
    #[serde(default)]
    pub token: String,
    /// GraphQL endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Project used when a call does not name one
    #[serde(default)]
    pub default_project_id: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// User-Agent header (GitHub rejects requests without one)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// HTTP/HTTPS proxy the request is routed through
    #[serde(default)]
    pub proxy: Option<String>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("projectboard/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl FetcherConfig {
    /// Create a configuration with the given token and defaults elsewhere
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            endpoint: default_endpoint(),
            default_project_id: None,
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
            user_agent: default_user_agent(),
            proxy: None,
        }
    }

    /// Set the GraphQL endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the default project id
    pub fn with_default_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.default_project_id = Some(project_id.into());
        self
    }

    /// Route requests through `proxy`
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Set the request timeout in seconds
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(GitHubError::config_error("Timeout must be greater than 0"));
        }
        if self.connect_timeout_secs == 0 {
            return Err(GitHubError::config_error(
                "Connect timeout must be greater than 0",
            ));
        }
        url::Url::parse(&self.endpoint).map_err(|e| {
            GitHubError::config_error(format!("Invalid endpoint '{}': {}", self.endpoint, e))
        })?;
        if let Some(proxy) = &self.proxy {
            url::Url::parse(proxy).map_err(|e| {
                GitHubError::config_error(format!("Invalid proxy '{}': {}", proxy, e))
            })?;
        }
        if matches!(self.default_project_id.as_deref(), Some("")) {
            return Err(GitHubError::config_error(
                "Default project id must not be empty",
            ));
        }
        Ok(())
    }

    /// HTTP client settings derived from this configuration
    pub fn http_config(&self) -> HttpConfig {
        let http = HttpConfig::github_graphql()
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .with_user_agent(self.user_agent.clone());

        match &self.proxy {
            Some(proxy) => http.with_proxy(proxy.clone()),
            None => http,
        }
    }
}
