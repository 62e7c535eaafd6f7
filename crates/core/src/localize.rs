//! Localized field resolution.
//!
//! Records carry localizable fields in parallel forms per base name:
//! `{base}Ro`, `{base}Ru`, `{base}En` and the unsuffixed legacy `{base}`.
//! One fallback law applies to every content type and every field:
//!
//! 1. `{base}{Suffix(lang)}`
//! 2. `{base}En`
//! 3. `{base}Ro`
//! 4. `{base}`
//! 5. the caller-supplied default
//!
//! Empty strings count as absent. Numbers and booleans are present values
//! (`0` and `false` are rendered, not skipped). `null`, arrays and objects are
//! not displayable text and fall through.

use serde_json::Value;

use crate::language::LanguageCode;
use crate::record::ContentRecord;

/// Nested per-language structure used for list-valued fields:
/// `translations.{lang}.{base}`.
const TRANSLATIONS_FIELD: &str = "translations";

/// Resolve a localized text field.
///
/// Never fails: if no candidate yields text, `default` is returned.
///
/// ```
/// use serde_json::json;
/// use smilecare_core::language::LanguageCode;
/// use smilecare_core::localize::resolve;
/// use smilecare_core::record::ContentRecord;
///
/// let post = ContentRecord::from_value(json!({"titleEn": "Hello", "titleRo": ""})).unwrap();
/// assert_eq!(resolve(&post, "title", LanguageCode::Ro, ""), "Hello");
/// ```
pub fn resolve(record: &ContentRecord, base: &str, lang: LanguageCode, default: &str) -> String {
    candidate_keys(base, lang)
        .iter()
        .find_map(|key| record.get(key).and_then(display_text))
        .unwrap_or_else(|| default.to_string())
}

/// Resolve a localized text field for a raw language tag.
///
/// Unknown tags read the `En` variant first, see [`LanguageCode::from_tag`].
pub fn resolve_tag(record: &ContentRecord, base: &str, tag: &str, default: &str) -> String {
    resolve(record, base, LanguageCode::from_tag(tag), default)
}

/// Resolve a localized list field (e.g. a service's feature list).
///
/// Order: `translations.{lang}.{base}`, `translations.ro.{base}`, the flat
/// `{base}` array, then an empty list. Empty arrays count as absent and only
/// string items are kept.
pub fn resolve_list(record: &ContentRecord, base: &str, lang: LanguageCode) -> Vec<String> {
    let translations = record.get(TRANSLATIONS_FIELD);
    let nested = |code: &str| {
        translations
            .and_then(|t| t.get(code))
            .and_then(|fields| fields.get(base))
    };

    [
        nested(lang.code()),
        nested(LanguageCode::Ro.code()),
        record.get(base),
    ]
    .into_iter()
    .flatten()
    .find_map(string_items)
    .unwrap_or_default()
}

/// The ordered candidate field names for `base` in `lang`.
///
/// Duplicates (e.g. `titleEn` twice when `lang` is English) are harmless:
/// a key that failed once fails again.
pub fn candidate_keys(base: &str, lang: LanguageCode) -> [String; 4] {
    [
        format!("{base}{}", lang.suffix()),
        format!("{base}{}", LanguageCode::En.suffix()),
        format!("{base}{}", LanguageCode::Ro.suffix()),
        base.to_string(),
    ]
}

fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn string_items(value: &Value) -> Option<Vec<String>> {
    let items: Vec<String> = value
        .as_array()?
        .iter()
        .filter_map(|item| item.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    (!items.is_empty()).then_some(items)
}
