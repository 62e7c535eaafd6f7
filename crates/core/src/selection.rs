//! Choosing between fetched and bundled content.
//!
//! A content type's fetched list is used only when the fetch succeeded and
//! returned at least one record. A failed fetch and an empty result are
//! treated the same way: the bundled static list is shown instead, so a page
//! never renders an empty section.

use serde::Serialize;

/// Where the records of an [`EffectiveContentSet`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    Api,
    Static,
}

/// The records actually rendered for one content type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectiveContentSet<T> {
    pub source: ContentSource,
    pub records: Vec<T>,
}

impl<T> EffectiveContentSet<T> {
    pub fn is_fallback(&self) -> bool {
        self.source == ContentSource::Static
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }
}

/// Pick the fetched records when present and non-empty, else the fallback.
///
/// `api_result` is `None` when the fetch failed.
pub fn select_effective<T>(
    api_result: Option<Vec<T>>,
    static_fallback: Vec<T>,
) -> EffectiveContentSet<T> {
    match api_result {
        Some(records) if !records.is_empty() => EffectiveContentSet {
            source: ContentSource::Api,
            records,
        },
        _ => EffectiveContentSet {
            source: ContentSource::Static,
            records: static_fallback,
        },
    }
}

/// [`select_effective`] over a fetch outcome; the error itself is dropped.
pub fn select_from_result<T, E>(
    result: Result<Vec<T>, E>,
    static_fallback: Vec<T>,
) -> EffectiveContentSet<T> {
    select_effective(result.ok(), static_fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fallback() -> Vec<&'static str> {
        vec!["static-1", "static-2"]
    }

    #[test]
    fn failed_fetch_uses_fallback() {
        let set = select_effective(None, fallback());
        assert_eq!(set.records, fallback());
        assert!(set.is_fallback());
    }

    #[test]
    fn empty_fetch_is_treated_as_failure() {
        // Product rule: an empty section is never rendered.
        let set = select_effective(Some(Vec::new()), fallback());
        assert_eq!(set.records, fallback());
        assert_eq!(set.source, ContentSource::Static);
    }

    #[test]
    fn non_empty_fetch_wins() {
        let set = select_effective(Some(vec!["api"]), fallback());
        assert_eq!(set.records, vec!["api"]);
        assert_eq!(set.source, ContentSource::Api);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn fetch_errors_select_fallback() {
        let result: Result<Vec<&str>, String> = Err("connection refused".into());
        let set = select_from_result(result, fallback());
        assert!(set.is_fallback());
    }

    #[test]
    fn empty_fallback_stays_empty() {
        let set: EffectiveContentSet<u8> = select_effective(None, Vec::new());
        assert!(set.is_empty());
    }
}
