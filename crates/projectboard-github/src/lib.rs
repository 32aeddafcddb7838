//! GitHub Projects (v2) integration for projectboard
//!
//! Fetches every item of one Projects (v2) board with a single GraphQL request
//! and groups the linked issues into four fixed status buckets:
//! - Query construction for a project node id
//! - Authenticated GraphQL transport
//! - Typed decoding of item field values
//! - Status classification, preserving board order
//!
//! ```no_run
//! use projectboard_github::{FetcherConfig, ProjectFetcher};
//!
//! # async fn run() -> projectboard_github::Result<()> {
//! let config = FetcherConfig::new("ghp_token").with_default_project_id("PVT_kwDOABC");
//! let fetcher = ProjectFetcher::new(config)?;
//! let json = fetcher.fetch_project(None).await;
//! println!("{}", json);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod errors;
pub mod managers;
pub mod models;
pub mod query;
pub mod transport;

pub use config::{FetcherConfig, DEFAULT_ENDPOINT};
pub use errors::{GitHubError, Result};
pub use managers::{
    extract_items, BoardOperations, Classification, ClassifySummary, ProjectFetcher, RenderStyle,
    StatusBucket, StatusBuckets,
};
pub use models::{Card, FieldValue, ItemContent, ProjectItem, RepositoryRef, PLACEHOLDER_TITLE};
pub use query::{build_query, PROJECT_ITEMS_QUERY};
pub use transport::{GraphQlError, GraphQlTransport, HttpGraphQlTransport};
