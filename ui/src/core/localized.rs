//! Localized CMS values: a plain string or a per-locale mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Locale used when a caller does not name one.
pub const DEFAULT_FALLBACK: &str = "en";

/// A CMS field that is either shared across locales or translated per locale.
///
/// Mapping entries that arrive as JSON `null` count as absent, so a
/// partially translated field falls back cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedString {
    Plain(String),
    PerLocale(BTreeMap<String, Option<String>>),
}

impl LocalizedString {
    /// Resolve for `locale`, then `fallback`, then the empty string.
    ///
    /// A present empty string is returned as-is; only a missing (or null)
    /// entry moves on to the fallback.
    pub fn resolve(&self, locale: &str, fallback: &str) -> String {
        match self {
            Self::Plain(value) => value.clone(),
            Self::PerLocale(map) => lookup(map, locale)
                .or_else(|| lookup(map, fallback))
                .map(str::to_string)
                .unwrap_or_default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Plain(value) => value.is_empty(),
            Self::PerLocale(map) => map.values().all(|v| v.as_deref().unwrap_or("").is_empty()),
        }
    }
}

impl From<&str> for LocalizedString {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_string())
    }
}

impl From<String> for LocalizedString {
    fn from(value: String) -> Self {
        Self::Plain(value)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for LocalizedString {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self::PerLocale(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), Some(v.to_string())))
                .collect(),
        )
    }
}

fn lookup<'a>(map: &'a BTreeMap<String, Option<String>>, locale: &str) -> Option<&'a str> {
    map.get(locale).and_then(|v| v.as_deref())
}

/// Resolve an optional value; absence resolves to the empty string.
pub fn resolve(value: Option<&LocalizedString>, locale: &str, fallback: &str) -> String {
    value
        .map(|v| v.resolve(locale, fallback))
        .unwrap_or_default()
}
