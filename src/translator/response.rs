use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::TranslatorError;
use crate::core::{FlattenedLanguageMap, LeafMap};

static CODE_FENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```[A-Za-z]*[ \t]*\r?\n?").unwrap());

/// Remove Markdown code fences models like to wrap JSON answers in.
pub fn strip_code_fences(text: &str) -> String {
    CODE_FENCE_REGEX.replace_all(text, "").trim().to_string()
}

/// Interpret a model answer as `language -> dotted key -> value`.
///
/// Values must be leaves; a nested mapping means the model ignored the flat
/// layout and the answer is rejected.
pub fn parse_translation(text: &str) -> Result<FlattenedLanguageMap, TranslatorError> {
    let cleaned = strip_code_fences(text);
    if cleaned.is_empty() {
        return Err(TranslatorError::EmptyResponse);
    }

    let value: Value = serde_json::from_str(&cleaned)
        .map_err(|e| TranslatorError::malformed(format!("invalid JSON: {}", e)))?;

    let Value::Object(languages) = value else {
        return Err(TranslatorError::malformed(
            "expected an object keyed by language code",
        ));
    };

    let mut result = FlattenedLanguageMap::with_capacity(languages.len());
    for (language, entries) in languages {
        let Value::Object(entries) = entries else {
            return Err(TranslatorError::malformed(format!(
                "language \"{}\" is not an object",
                language
            )));
        };

        let mut leaves = LeafMap::with_capacity(entries.len());
        for (key, value) in entries {
            if value.is_object() {
                return Err(TranslatorError::malformed(format!(
                    "key \"{}\" in language \"{}\" is a nested object",
                    key, language
                )));
            }
            leaves.insert(key, value);
        }
        result.insert(language, leaves);
    }

    Ok(result)
}
