//! Project board managers
//!
//! The fetcher drives a single request; board operations do the sorting.

pub mod board_operations;
pub mod project_fetcher;

pub use board_operations::{
    BoardOperations, Classification, ClassifySummary, StatusBucket, StatusBuckets,
};
pub use project_fetcher::{extract_items, ProjectFetcher, RenderStyle};
