//! Loosely-shaped content records and their identifiers.
//!
//! Records arrive from two backends with different naming conventions, and
//! from the bundled static data. They are kept as JSON objects so that field
//! resolution works uniformly over all of them.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::language::LanguageCode;
use crate::localize;

/// Identifier of a content record.
///
/// External CMS records use string identifiers, server and static records use
/// small integers. The shape the source provides is preserved; comparisons go
/// through the string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentId {
    Number(i64),
    Text(String),
}

impl ContentId {
    /// String equality after coercion: `ContentId::Number(7)` matches `"7"`.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            ContentId::Number(n) => n.to_string() == raw.trim(),
            ContentId::Text(s) => s == raw.trim(),
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().map(ContentId::Number),
            Value::String(s) if !s.is_empty() => Some(ContentId::Text(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentId::Number(n) => write!(f, "{n}"),
            ContentId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ContentId {
    fn from(n: i64) -> Self {
        ContentId::Number(n)
    }
}

impl From<&str> for ContentId {
    fn from(s: &str) -> Self {
        ContentId::Text(s.to_string())
    }
}

/// A single content record: a JSON object of field name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentRecord(Map<String, Value>);

impl ContentRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Build a record from a JSON value. Non-object values yield `None`.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn fields_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.0
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Record identifier, read from `id` and then `_id`.
    pub fn id(&self) -> Option<ContentId> {
        ["id", "_id"]
            .iter()
            .filter_map(|key| self.0.get(*key))
            .find_map(ContentId::from_value)
    }

    /// Non-empty string value of a plain (non-localized) field.
    pub fn str_field(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Integer value of a field, accepting numeric strings.
    pub fn int_field(&self, field: &str) -> Option<i64> {
        match self.0.get(field)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Localized text for `base`, see [`localize::resolve`].
    pub fn text(&self, base: &str, lang: LanguageCode, default: &str) -> String {
        localize::resolve(self, base, lang, default)
    }

    /// Localized list for `base`, see [`localize::resolve_list`].
    pub fn list(&self, base: &str, lang: LanguageCode) -> Vec<String> {
        localize::resolve_list(self, base, lang)
    }
}

impl From<Map<String, Value>> for ContentRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Find a record by identifier, comparing by string after coercion.
pub fn find_by_id<'a>(records: &'a [ContentRecord], raw_id: &str) -> Option<&'a ContentRecord> {
    records
        .iter()
        .find(|record| record.id().is_some_and(|id| id.matches(raw_id)))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: Value) -> ContentRecord {
        ContentRecord::from_value(value).unwrap()
    }

    #[test]
    fn numeric_id_matches_string_form() {
        assert!(ContentId::Number(7).matches("7"));
        assert!(!ContentId::Number(7).matches("07x"));
        assert!(ContentId::Text("abc123".into()).matches("abc123"));
    }

    #[test]
    fn id_reads_underscore_id_when_id_missing() {
        let r = record(json!({"_id": "64f0c2", "title": "x"}));
        assert_eq!(r.id(), Some(ContentId::Text("64f0c2".into())));
    }

    #[test]
    fn id_prefers_plain_id() {
        let r = record(json!({"id": 3, "_id": "64f0c2"}));
        assert_eq!(r.id(), Some(ContentId::Number(3)));
    }

    #[test]
    fn find_by_id_accepts_either_shape() {
        let records = vec![
            record(json!({"id": 1, "title": "static"})),
            record(json!({"id": "cms-42", "title": "external"})),
        ];
        assert_eq!(
            find_by_id(&records, "1").and_then(|r| r.str_field("title")),
            Some("static")
        );
        assert_eq!(
            find_by_id(&records, "cms-42").and_then(|r| r.str_field("title")),
            Some("external")
        );
        assert!(find_by_id(&records, "2").is_none());
    }

    #[test]
    fn non_object_values_are_not_records() {
        assert!(ContentRecord::from_value(json!([1, 2])).is_none());
        assert!(ContentRecord::from_value(json!("title")).is_none());
    }

    #[test]
    fn int_field_accepts_numeric_strings() {
        let r = record(json!({"orderIndex": "4", "displayOrder": 2, "rating": true}));
        assert_eq!(r.int_field("orderIndex"), Some(4));
        assert_eq!(r.int_field("displayOrder"), Some(2));
        assert_eq!(r.int_field("rating"), None);
    }

    #[test]
    fn id_serializes_in_source_shape() {
        assert_eq!(serde_json::to_value(ContentId::Number(5)).unwrap(), json!(5));
        assert_eq!(
            serde_json::to_value(ContentId::Text("a1".into())).unwrap(),
            json!("a1")
        );
    }
}
