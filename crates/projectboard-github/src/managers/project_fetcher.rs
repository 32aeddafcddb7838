//! Project Fetcher - Fetches a board and returns its items grouped by status

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, info};

use super::board_operations::{BoardOperations, StatusBuckets};
use crate::{
    config::FetcherConfig,
    errors::{GitHubError, Result},
    models::ProjectItem,
    query::build_query,
    transport::{graphql_errors, GraphQlTransport, HttpGraphQlTransport},
};

const ITEMS_PATH: [&str; 4] = ["data", "node", "items", "nodes"];

/// JSON layout of a successful fetch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderStyle {
    /// Single line
    #[default]
    Compact,
    /// Indented, one card field per line
    Pretty,
}

/// Pull the item list out of a `node(id:) { ... on ProjectV2 { items } }` reply
pub fn extract_items(mut response: Value) -> Result<Vec<ProjectItem>> {
    let errors = graphql_errors(&response);

    let mut cursor = &mut response;
    for (depth, key) in ITEMS_PATH.iter().enumerate() {
        cursor = match cursor.get_mut(*key) {
            Some(next) if !next.is_null() => next,
            _ => {
                let mut message = format!("missing `{}`", ITEMS_PATH[..=depth].join("."));
                if !errors.is_empty() {
                    let details: Vec<_> = errors.iter().map(|e| e.message.as_str()).collect();
                    message.push_str(&format!(" (GraphQL errors: {})", details.join("; ")));
                }
                return Err(GitHubError::malformed(message));
            }
        };
    }

    serde_json::from_value(cursor.take())
        .map_err(|e| GitHubError::malformed(format!("invalid project item: {}", e)))
}

/// Project Fetcher
///
/// Holds the injected configuration and transport; keeps no state between
/// calls.
pub struct ProjectFetcher {
    config: FetcherConfig,
    transport: Arc<dyn GraphQlTransport>,
}

impl ProjectFetcher {
    /// Create a fetcher that talks to `config.endpoint` over HTTP
    pub fn new(config: FetcherConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpGraphQlTransport::new(config.endpoint.clone(), config.http_config())?;
        info!(
            endpoint = %config.endpoint,
            default_project = ?config.default_project_id,
            "Creating project fetcher"
        );
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a fetcher over a custom transport
    pub fn with_transport(config: FetcherConfig, transport: Arc<dyn GraphQlTransport>) -> Self {
        Self { config, transport }
    }

    /// Project fetched when a call names none
    pub fn default_project_id(&self) -> Option<&str> {
        self.config.default_project_id.as_deref()
    }

    /// Get configuration
    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Pick the call-time id, falling back to the configured default
    pub fn resolve_project_id<'a>(&'a self, project_id: Option<&'a str>) -> Result<&'a str> {
        project_id
            .or_else(|| self.default_project_id())
            .ok_or(GitHubError::MissingProjectId)
    }

    /// Fetch the board and group its cards by status
    pub async fn try_fetch_project(&self, project_id: Option<&str>) -> Result<StatusBuckets> {
        let project_id = self.resolve_project_id(project_id)?;
        self.fetch_buckets(project_id).await
    }

    /// Fetch the board and render the buckets as JSON.
    ///
    /// Never fails: any error comes back as a string starting with `Error:`.
    pub async fn fetch_project(&self, project_id: Option<&str>) -> String {
        self.fetch_project_with(project_id, RenderStyle::Compact).await
    }

    /// [`Self::fetch_project`] with a choice of JSON layout
    pub async fn fetch_project_with(&self, project_id: Option<&str>, style: RenderStyle) -> String {
        let project_id = match self.resolve_project_id(project_id) {
            Ok(id) => id,
            Err(e) => return format!("Error: {}", e),
        };

        let rendered = self
            .fetch_buckets(project_id)
            .await
            .and_then(|buckets| match style {
                RenderStyle::Compact => buckets.to_json(),
                RenderStyle::Pretty => buckets.to_json_pretty(),
            });

        rendered.unwrap_or_else(|e| {
            error!(
                project_id = %project_id,
                http_status = ?e.http_status(),
                timed_out = e.is_timeout(),
                error = %e,
                "Failed to fetch project"
            );
            format!("Error: Failed to read file {}. {}", project_id, e)
        })
    }

    async fn fetch_buckets(&self, project_id: &str) -> Result<StatusBuckets> {
        let query = build_query(project_id);
        debug!(project_id = %project_id, "Fetching project items");

        let response = self.transport.send(&query, &self.config.token).await?;
        let items = extract_items(response)?;
        let classification = BoardOperations::classify(&items);

        let summary = classification.summary;
        info!(
            project_id = %project_id,
            items = summary.items_seen,
            kept = summary.cards_kept,
            placeholders = summary.placeholders_dropped,
            unknown_status = summary.unknown_status,
            "Classified project items"
        );
        for (bucket, cards) in classification.buckets.iter() {
            debug!(bucket = %bucket, cards = cards.len(), "Status bucket");
        }

        Ok(classification.buckets)
    }
}
