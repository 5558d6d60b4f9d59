//! Core data types flowing through the search pipeline.

use serde::Serialize;
use serde_json::{Map, Value};

/// One table row: an ordered field-name → value map.
///
/// Field sets vary per table schema at configuration time, so rows are
/// dynamically shaped rather than fixed structs. The `preserve_order`
/// feature on `serde_json` keeps fields in schema order end to end.
pub type Row = Map<String, Value>;

/// Fetch a row field as a string slice, empty when the field is absent.
pub fn field<'a>(row: &'a Row, key: &str) -> &'a str {
    row.get(key).and_then(Value::as_str).unwrap_or("")
}

/// First non-empty value among the given fields, if any.
pub fn first_field<'a>(row: &'a Row, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .map(|key| field(row, key))
        .find(|value| !value.is_empty())
}

/// Response envelope returned by every search entry point.
///
/// Expected failures (missing table file, unknown stack) travel in the
/// `error` field rather than as `Err` — the presenter decides how to show
/// them. `None` fields are omitted from JSON output.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domains: Option<Vec<String>>,
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    pub count: usize,
    pub results: Vec<Row>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResponse {
    /// An envelope carrying only an error message.
    pub fn from_error(query: &str, message: String) -> Self {
        Self {
            query: query.to_string(),
            error: Some(message),
            ..Self::default()
        }
    }
}
