//! Supported site languages.
//!
//! Romanian is the default language. There is no ambient "current language":
//! callers pass a [`LanguageCode`] into every resolve call.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the three languages the site is published in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    #[default]
    Ro,
    Ru,
    En,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 3] = [LanguageCode::Ro, LanguageCode::Ru, LanguageCode::En];

    /// Two-letter lowercase code, e.g. `"ru"`.
    pub fn code(self) -> &'static str {
        match self {
            LanguageCode::Ro => "ro",
            LanguageCode::Ru => "ru",
            LanguageCode::En => "en",
        }
    }

    /// Field-name suffix for localized variants (`titleRo`, `titleRu`, `titleEn`).
    pub fn suffix(self) -> &'static str {
        match self {
            LanguageCode::Ro => "Ro",
            LanguageCode::Ru => "Ru",
            LanguageCode::En => "En",
        }
    }

    /// Lenient tag parsing used for field lookups.
    ///
    /// Region subtags are ignored and unknown tags map to [`LanguageCode::En`],
    /// so `"ro-MD"` reads Romanian fields and `"de"` reads English ones.
    pub fn from_tag(tag: &str) -> Self {
        primary_subtag(tag).parse().unwrap_or(LanguageCode::En)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LanguageCode {
    type Err = CoreError;

    /// Strict parsing: accepts `ro`, `ru`, `en` in any case, with an optional
    /// region subtag (`ru-RU`, `en_GB`). Anything else is a validation error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match primary_subtag(s).to_ascii_lowercase().as_str() {
            "ro" => Ok(LanguageCode::Ro),
            "ru" => Ok(LanguageCode::Ru),
            "en" => Ok(LanguageCode::En),
            _ => Err(CoreError::Validation(format!("unsupported language code '{s}'"))),
        }
    }
}

fn primary_subtag(tag: &str) -> &str {
    tag.trim()
        .split(|c| c == '-' || c == '_')
        .next()
        .unwrap_or_default()
}
