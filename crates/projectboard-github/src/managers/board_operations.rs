//! Board Operations - Sorts project items into status buckets

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    errors::Result,
    models::{Card, ProjectItem},
};

/// Status column a card can be sorted into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusBucket {
    /// "To be tested" column
    #[serde(rename = "To be tested")]
    ToBeTested,
    /// "In Progress" column
    #[serde(rename = "In Progress")]
    InProgress,
    /// "Todo" column
    #[serde(rename = "Todo")]
    Todo,
    /// "Done" column
    #[serde(rename = "Done")]
    Done,
}

impl StatusBucket {
    /// All buckets, in output order
    pub const ALL: [StatusBucket; 4] = [
        StatusBucket::ToBeTested,
        StatusBucket::InProgress,
        StatusBucket::Todo,
        StatusBucket::Done,
    ];

    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusBucket::ToBeTested => "To be tested",
            StatusBucket::InProgress => "In Progress",
            StatusBucket::Todo => "Todo",
            StatusBucket::Done => "Done",
        }
    }

    /// Bucket whose name is exactly `status` (case-sensitive)
    pub fn from_status(status: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bucket| bucket.as_str() == status)
    }
}

impl fmt::Display for StatusBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cards grouped by status, each bucket in board order.
///
/// Always serializes all four buckets, in [`StatusBucket::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBuckets {
    #[serde(rename = "To be tested", default)]
    to_be_tested: Vec<Card>,
    #[serde(rename = "In Progress", default)]
    in_progress: Vec<Card>,
    #[serde(rename = "Todo", default)]
    todo: Vec<Card>,
    #[serde(rename = "Done", default)]
    done: Vec<Card>,
}

impl StatusBuckets {
    /// Create four empty buckets
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards in `bucket`
    pub fn get(&self, bucket: StatusBucket) -> &[Card] {
        match bucket {
            StatusBucket::ToBeTested => &self.to_be_tested,
            StatusBucket::InProgress => &self.in_progress,
            StatusBucket::Todo => &self.todo,
            StatusBucket::Done => &self.done,
        }
    }

    fn get_mut(&mut self, bucket: StatusBucket) -> &mut Vec<Card> {
        match bucket {
            StatusBucket::ToBeTested => &mut self.to_be_tested,
            StatusBucket::InProgress => &mut self.in_progress,
            StatusBucket::Todo => &mut self.todo,
            StatusBucket::Done => &mut self.done,
        }
    }

    /// Append a card to `bucket`
    pub fn push(&mut self, bucket: StatusBucket, card: Card) {
        self.get_mut(bucket).push(card);
    }

    /// Buckets with their cards, in output order
    pub fn iter(&self) -> impl Iterator<Item = (StatusBucket, &[Card])> + '_ {
        StatusBucket::ALL
            .into_iter()
            .map(move |bucket| (bucket, self.get(bucket)))
    }

    /// Total number of cards across all buckets
    pub fn total_cards(&self) -> usize {
        self.iter().map(|(_, cards)| cards.len()).sum()
    }

    /// Compact JSON rendering
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON rendering
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Tally of one classification pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifySummary {
    /// Items read from the response
    pub items_seen: usize,
    /// Cards placed into a bucket
    pub cards_kept: usize,
    /// Known-status items without title or body
    pub placeholders_dropped: usize,
    /// Items whose status is missing or not a bucket
    pub unknown_status: usize,
}

/// Result of [`BoardOperations::classify`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Cards grouped by status
    pub buckets: StatusBuckets,
    /// Counts of what happened to each item
    pub summary: ClassifySummary,
}

/// Board Operations
pub struct BoardOperations;

impl BoardOperations {
    /// Sort `items` into status buckets in a single pass.
    ///
    /// Items whose status is absent or unknown are dropped with a warning.
    /// Items with a known status but neither title nor body are dropped
    /// silently. Everything else keeps its relative order.
    pub fn classify(items: &[ProjectItem]) -> Classification {
        let mut buckets = StatusBuckets::new();
        let mut summary = ClassifySummary {
            items_seen: items.len(),
            ..Default::default()
        };

        for item in items {
            let card = Card::from_item(item);

            let Some(bucket) = card.status.as_deref().and_then(StatusBucket::from_status) else {
                warn!(item_id = %card.id, status = ?card.status, "Unknown status");
                summary.unknown_status += 1;
                continue;
            };

            if card.is_placeholder() {
                summary.placeholders_dropped += 1;
                continue;
            }

            debug!(item_id = %card.id, title = %card.title, bucket = %bucket, "Card classified");
            buckets.push(bucket, card);
            summary.cards_kept += 1;
        }

        Classification { buckets, summary }
    }
}
