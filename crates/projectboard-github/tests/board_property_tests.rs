//! Property-based tests for board classification
//!
//! These tests verify correctness properties that should hold across all
//! generated boards.

use proptest::prelude::*;
use projectboard_github::{BoardOperations, ProjectItem, StatusBucket};
use serde_json::json;

// Strategy for status option names, known and unknown
fn status_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(Some("To be tested".to_string())),
        Just(Some("In Progress".to_string())),
        Just(Some("Todo".to_string())),
        Just(Some("Done".to_string())),
        Just(Some("Blocked".to_string())),
        Just(Some("todo".to_string())),
        Just(None),
    ]
}

// Strategy for the casing of the status field's name
fn status_field_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Status".to_string()),
        Just("status".to_string()),
        Just("STATUS".to_string()),
        Just("sTaTuS".to_string()),
    ]
}

// Strategy for titles, including the placeholder and missing titles
fn title_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("N/A".to_string())),
        r"[a-zA-Z0-9 ]{1,30}".prop_map(Some),
    ]
}

// Strategy for bodies, including empty and missing bodies
fn body_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![Just(None), Just(Some(String::new())), r"[a-zA-Z0-9 .,]{1,60}".prop_map(Some)]
}

// Strategy for a whole board; item ids encode their position
fn board_strategy() -> impl Strategy<Value = Vec<ProjectItem>> {
    prop::collection::vec(
        (status_strategy(), status_field_strategy(), title_strategy(), body_strategy()),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(index, (status, field, title, body))| {
                let field_values = match status {
                    Some(name) => json!([
                        {"text": "ignored", "field": {"name": "Notes"}},
                        {"name": name, "field": {"name": field}}
                    ]),
                    None => json!([{"number": 2, "field": {"name": "Estimate"}}]),
                };
                serde_json::from_value::<ProjectItem>(json!({
                    "id": format!("{:04}", index),
                    "fieldValues": {"nodes": field_values},
                    "content": {"title": title, "body": body}
                }))
                .unwrap()
            })
            .collect::<Vec<_>>()
    })
}

// *For any* board, no bucket contains a card with title "N/A" and an empty body.
proptest! {
    #[test]
    fn prop_no_placeholder_cards(items in board_strategy()) {
        let result = BoardOperations::classify(&items);
        for (_, cards) in result.buckets.iter() {
            for card in cards {
                prop_assert!(!(card.title == "N/A" && card.body.is_empty()));
            }
        }
    }

    #[test]
    fn prop_cards_match_their_bucket(items in board_strategy()) {
        let result = BoardOperations::classify(&items);
        for (bucket, cards) in result.buckets.iter() {
            for card in cards {
                prop_assert_eq!(card.status.as_deref(), Some(bucket.as_str()));
            }
        }
    }

    #[test]
    fn prop_arrival_order_preserved(items in board_strategy()) {
        let result = BoardOperations::classify(&items);
        for (_, cards) in result.buckets.iter() {
            let ids: Vec<_> = cards.iter().map(|c| c.id.clone()).collect();
            let mut sorted = ids.clone();
            sorted.sort();
            prop_assert_eq!(ids, sorted);
        }
    }

    #[test]
    fn prop_every_item_accounted_for(items in board_strategy()) {
        let result = BoardOperations::classify(&items);
        let summary = result.summary;
        prop_assert_eq!(summary.items_seen, items.len());
        prop_assert_eq!(
            summary.cards_kept + summary.placeholders_dropped + summary.unknown_status,
            items.len()
        );
        prop_assert_eq!(result.buckets.total_cards(), summary.cards_kept);
    }

    #[test]
    fn prop_unknown_statuses_never_bucketed(items in board_strategy()) {
        let result = BoardOperations::classify(&items);
        let expected_unknown = items
            .iter()
            .filter(|item| item.status().and_then(StatusBucket::from_status).is_none())
            .count();
        prop_assert_eq!(result.summary.unknown_status, expected_unknown);
    }

    #[test]
    fn prop_classification_deterministic(items in board_strategy()) {
        let first = BoardOperations::classify(&items).buckets.to_json().unwrap();
        let second = BoardOperations::classify(&items).buckets.to_json().unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_output_always_has_four_buckets(items in board_strategy()) {
        let json = BoardOperations::classify(&items).buckets.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();
        prop_assert_eq!(object.len(), 4);
        for bucket in StatusBucket::ALL {
            prop_assert!(object[bucket.as_str()].is_array());
        }
    }
}
