//! GitHub Projects (v2) Data Models
//!
//! Typed views of the GraphQL payload returned for a project's items. Only the
//! fields selected by [`crate::query::PROJECT_ITEMS_QUERY`] are modelled.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Title given to a card whose item has no issue title
pub const PLACEHOLDER_TITLE: &str = "N/A";

/// GraphQL connection wrapper (`{ "nodes": [...] }`)
#[derive(Debug, Clone, Deserialize)]
pub struct Connection<T> {
    /// Connection nodes
    #[serde(default = "Vec::new")]
    pub nodes: Vec<T>,
}

/// Value of a single project field on an item
///
/// Decoded from one member of the `ProjectV2ItemFieldValue` union. Each member
/// is told apart by the key that only it carries (`text`, `date`, `name`,
/// `number`); union members the query does not select arrive as `{}` and
/// decode to [`FieldValue::Unsupported`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub enum FieldValue {
    /// Free-text field
    Text {
        /// Field name
        field: String,
        /// Text value
        text: Option<String>,
    },
    /// Date field (ISO-8601 date string)
    Date {
        /// Field name
        field: String,
        /// Date value
        date: Option<String>,
    },
    /// Single-select field, e.g. the board's status column
    SingleSelect {
        /// Field name
        field: String,
        /// Selected option name
        name: Option<String>,
    },
    /// Numeric field
    Number {
        /// Field name
        field: String,
        /// Number value
        number: Option<f64>,
    },
    /// Union member not selected by the query
    Unsupported,
}

impl FieldValue {
    /// Name of the project field this value belongs to
    pub fn field_name(&self) -> Option<&str> {
        match self {
            FieldValue::Text { field, .. }
            | FieldValue::Date { field, .. }
            | FieldValue::SingleSelect { field, .. }
            | FieldValue::Number { field, .. } => Some(field.as_str()),
            FieldValue::Unsupported => None,
        }
    }

    /// Whether this is the single-select field named "status" (any case)
    pub fn is_status_field(&self) -> bool {
        match self {
            FieldValue::SingleSelect { field, .. } => field.to_lowercase() == "status",
            _ => false,
        }
    }

    /// Selected option of a single-select value
    pub fn selected_option(&self) -> Option<&str> {
        match self {
            FieldValue::SingleSelect { name, .. } => name.as_deref(),
            _ => None,
        }
    }
}

impl TryFrom<Map<String, Value>> for FieldValue {
    type Error = String;

    fn try_from(mut node: Map<String, Value>) -> Result<Self, Self::Error> {
        let field = field_name(&node)?;

        if let Some(value) = node.remove("name") {
            return Ok(FieldValue::SingleSelect {
                field,
                name: optional_string(value, "name")?,
            });
        }
        if let Some(value) = node.remove("text") {
            return Ok(FieldValue::Text {
                field,
                text: optional_string(value, "text")?,
            });
        }
        if let Some(value) = node.remove("date") {
            return Ok(FieldValue::Date {
                field,
                date: optional_string(value, "date")?,
            });
        }
        if let Some(value) = node.remove("number") {
            let number = match value {
                Value::Null => None,
                Value::Number(n) => n.as_f64(),
                other => return Err(format!("expected `number` to be a number, found {}", other)),
            };
            return Ok(FieldValue::Number { field, number });
        }

        Ok(FieldValue::Unsupported)
    }
}

fn field_name(node: &Map<String, Value>) -> Result<String, String> {
    match node.get("field").and_then(|field| field.get("name")) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(name)) => Ok(name.clone()),
        Some(other) => Err(format!("expected `field.name` to be a string, found {}", other)),
    }
}

fn optional_string(value: Value, key: &str) -> Result<Option<String>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        other => Err(format!("expected `{}` to be a string, found {}", key, other)),
    }
}

/// Repository reference on issue content
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryRef {
    /// Repository name
    pub name: String,
}

/// Issue content linked to a project item
///
/// Draft issues and pull requests decode to an all-empty value because the
/// query only selects `Issue` fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ItemContent {
    /// Issue title
    #[serde(default)]
    pub title: Option<String>,
    /// Issue body
    #[serde(default)]
    pub body: Option<String>,
    /// Issue number
    #[serde(default)]
    pub number: Option<u64>,
    /// Owning repository
    #[serde(default)]
    pub repository: Option<RepositoryRef>,
}

impl ItemContent {
    /// Name of the repository the issue lives in
    pub fn repository_name(&self) -> Option<&str> {
        self.repository.as_ref().map(|repo| repo.name.as_str())
    }
}

/// A single row of a Projects (v2) board
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItem {
    /// Item node id
    pub id: String,
    /// Field values, in API order
    #[serde(default, deserialize_with = "connection_nodes")]
    pub field_values: Vec<FieldValue>,
    /// Linked issue content
    #[serde(default)]
    pub content: Option<ItemContent>,
}

impl ProjectItem {
    /// The item's status option.
    ///
    /// The first status field decides; if that field has no option selected
    /// the status is absent even when a later status field has one.
    pub fn status(&self) -> Option<&str> {
        self.field_values
            .iter()
            .find(|value| value.is_status_field())
            .and_then(FieldValue::selected_option)
    }
}

fn connection_nodes<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let connection = Option::<Connection<T>>::deserialize(deserializer)?;
    Ok(connection.map(|c| c.nodes).unwrap_or_default())
}

/// Issue record emitted for each classified item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Item node id
    pub id: String,
    /// Issue title, `"N/A"` when absent
    pub title: String,
    /// Issue body, empty when absent
    pub body: String,
    /// Status option of the item
    pub status: Option<String>,
}

impl Card {
    /// Build a card from a project item
    pub fn from_item(item: &ProjectItem) -> Self {
        let content = item.content.as_ref();
        Self {
            id: item.id.clone(),
            title: content
                .and_then(|c| c.title.clone())
                .unwrap_or_else(|| PLACEHOLDER_TITLE.to_string()),
            body: content.and_then(|c| c.body.clone()).unwrap_or_default(),
            status: item.status().map(str::to_string),
        }
    }

    /// Whether this card carries no issue data at all
    pub fn is_placeholder(&self) -> bool {
        self.title == PLACEHOLDER_TITLE && self.body.is_empty()
    }
}
