use thiserror::Error;

use crate::translator::TranslatorError;

/// A resource value that cannot be represented as a [`TranslationTree`](super::TranslationTree).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("translations must be a mapping of language codes, found {found}")]
    RootNotMapping { found: &'static str },

    #[error("language \"{language}\" must map to key/value pairs, found {found}")]
    LanguageNotMapping {
        language: String,
        found: &'static str,
    },

    #[error("language code \"{language}\" contains '.'")]
    DottedLanguage { language: String },

    #[error("key \"{path}\" in language \"{language}\" contains '.' inside a key name")]
    DottedKey { language: String, path: String },
}

/// Why `auto_translate` gave up on a tree. The tree is never modified.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("no keys to translate")]
    NothingToTranslate,

    #[error("no languages to translate to: \"{language}\" is the only language")]
    NoTargetLanguages { language: String },

    #[error("translation failed: {0}")]
    Translator(#[from] TranslatorError),
}

/// A requested key path that was dropped from the seed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkippedKey {
    /// No `.` separating the language from the key.
    #[error("invalid key path \"{requested}\" (expected <lang>.<key>)")]
    MalformedKeyPath { requested: String },
    /// The language or the key does not exist in the tree.
    #[error("key \"{key}\" not found in language \"{language}\"")]
    KeyNotFound { language: String, key: String },
}
