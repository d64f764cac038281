//! Missing-key detection across languages.

use indexmap::{IndexMap, IndexSet};
use serde_json::Value;

use super::tree::FlattenedLanguageMap;

/// Keys each language lacks compared to the union of all languages.
///
/// Every language of the input appears, in input order, even when nothing is
/// missing for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingKeyReport {
    by_language: IndexMap<String, Vec<String>>,
}

impl MissingKeyReport {
    pub fn get(&self, language: &str) -> Option<&[String]> {
        self.by_language.get(language).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.by_language
            .iter()
            .map(|(language, keys)| (language.as_str(), keys.as_slice()))
    }

    /// Number of (language, key) pairs missing.
    pub fn total(&self) -> usize {
        self.by_language.values().map(Vec::len).sum()
    }

    /// True when every language has every key.
    pub fn is_complete(&self) -> bool {
        self.by_language.values().all(Vec::is_empty)
    }

    pub fn language_count(&self) -> usize {
        self.by_language.len()
    }
}

/// Union of all dotted keys, in first-seen order (languages in input order, keys
/// in input order within each language).
///
/// Empty groups (`{}` leaves) hold no text and are not keys.
pub fn canonical_keys(map: &FlattenedLanguageMap) -> IndexSet<&str> {
    map.values()
        .flat_map(|leaves| {
            leaves
                .iter()
                .filter(|(_, value)| !is_empty_group(value))
                .map(|(key, _)| key.as_str())
        })
        .collect()
}

fn is_empty_group(value: &Value) -> bool {
    value.as_object().is_some_and(|map| map.is_empty())
}

pub fn find_missing_keys(map: &FlattenedLanguageMap) -> MissingKeyReport {
    let all_keys = canonical_keys(map);

    let by_language = map
        .iter()
        .map(|(language, leaves)| {
            let missing = all_keys
                .iter()
                .filter(|key| !leaves.contains_key(**key))
                .map(|key| key.to_string())
                .collect();
            (language.clone(), missing)
        })
        .collect();

    MissingKeyReport { by_language }
}
