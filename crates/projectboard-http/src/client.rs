//! HTTP client implementation

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use serde_json::Value;
use tracing::debug;

use crate::{
    config::HttpConfig,
    error::{HttpError, Result},
};

/// Mockable HTTP client trait
#[async_trait]
pub trait HttpClientTrait: Send + Sync {
    /// POST a JSON body and decode the JSON reply.
    ///
    /// Non-2xx responses are returned as [`HttpError::HttpStatus`]; a body that
    /// does not parse as JSON is returned as [`HttpError::InvalidJson`].
    async fn post_json(&self, url: &str, headers: HeaderMap, body: &Value) -> Result<Value>;
}

/// Production HTTP client
pub struct HttpClient {
    inner: reqwest::Client,
    config: HttpConfig,
}

impl HttpClient {
    /// Create a new HTTP client with configuration
    pub fn new(config: HttpConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .redirect(if config.max_redirects > 0 {
                reqwest::redirect::Policy::limited(config.max_redirects)
            } else {
                reqwest::redirect::Policy::none()
            });

        if let Some(proxy_url) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| HttpError::InvalidProxy(e.to_string()))?;
            builder = builder.proxy(proxy);
        }

        let inner = builder
            .build()
            .map_err(|e| HttpError::BuildError(e.to_string()))?;

        Ok(Self { inner, config })
    }

    /// Get configuration
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn post_json(&self, url: &str, headers: HeaderMap, body: &Value) -> Result<Value> {
        let url = url
            .parse::<url::Url>()
            .map_err(|e| HttpError::InvalidUrl(e.to_string()))?;

        debug!("HTTP POST: {}", url);

        let response = self
            .inner
            .post(url)
            .headers(headers)
            .json(body)
            .send()
            .await
            .map_err(HttpError::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::HttpStatus {
                status,
                message: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string()),
            });
        }

        let text = response.text().await.map_err(HttpError::RequestFailed)?;
        debug!(status = %status, bytes = text.len(), "HTTP response received");

        serde_json::from_str(&text).map_err(|e| HttpError::InvalidJson(e.to_string()))
    }
}

/// Create a shared HTTP client (Arc-wrapped for cloning)
pub fn shared_client(config: HttpConfig) -> Result<Arc<dyn HttpClientTrait>> {
    Ok(Arc::new(HttpClient::new(config)?))
}
