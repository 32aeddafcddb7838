//! GraphQL query for a project's items

/// Token in [`PROJECT_ITEMS_QUERY`] that stands for the project node id
pub const PROJECT_ID_PLACEHOLDER: &str = "<REPLACE_ME>";

/// Upper bound on items (and field values per item) fetched in one request
pub const PAGE_SIZE: usize = 100;

/// Items of a Projects (v2) board with their field values and issue content
pub const PROJECT_ITEMS_QUERY: &str = r#"
fragment projectV2Fields on ProjectV2Item {
  id
  fieldValues(first: 100) {
    nodes {
      ... on ProjectV2ItemFieldTextValue {
        text
        field {
          ... on ProjectV2FieldCommon {
            name
          }
        }
      }
      ... on ProjectV2ItemFieldDateValue {
        date
        field {
          ... on ProjectV2FieldCommon {
            name
          }
        }
      }
      ... on ProjectV2ItemFieldSingleSelectValue {
        name
        field {
          ... on ProjectV2FieldCommon {
            name
          }
        }
      }
      ... on ProjectV2ItemFieldNumberValue {
        number
        field {
          ... on ProjectV2FieldCommon {
            name
          }
        }
      }
    }
  }
  content {
    ... on Issue {
      body
      title
      number
      repository {
        name
      }
    }
  }
}
query {
  node(id: "<REPLACE_ME>") {
    ... on ProjectV2 {
      items(first: 100) {
        nodes {
          ...projectV2Fields
        }
      }
    }
  }
}
"#;

/// Substitute `project_id` into the items query.
///
/// The id is inserted verbatim; callers must not pass ids containing `"` or
/// other characters that would break the document.
pub fn build_query(project_id: &str) -> String {
    PROJECT_ITEMS_QUERY.replace(PROJECT_ID_PLACEHOLDER, project_id)
}
