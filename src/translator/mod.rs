//! Translation backends.
//!
//! The engine only knows the [`Translator`] trait: hand over a seed of flattened
//! values and the languages wanted, get back the same dotted keys for every one
//! of those languages.

use std::future::Future;

use thiserror::Error;

use crate::core::FlattenedLanguageMap;

mod gemini;
mod prompt;
mod response;

pub use gemini::{GeminiTranslator, TranslatorConfig};
pub use prompt::build_prompt;
pub use response::{parse_translation, strip_code_fences};

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub trait Translator {
    /// Translate every value of `seed` into every language of `target_languages`.
    ///
    /// The result maps each target language to the dotted keys of the seed.
    fn translate(
        &self,
        seed: &FlattenedLanguageMap,
        target_languages: &[String],
    ) -> impl Future<Output = Result<FlattenedLanguageMap, TranslatorError>>;
}

#[derive(Debug, Error)]
pub enum TranslatorError {
    #[error("no API key configured (set GOOGLE_AI_API_KEY or pass --api-key)")]
    MissingApiKey,

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to translation service failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("translation service responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("translation service returned no text")]
    EmptyResponse,

    #[error("could not interpret translation response: {reason}")]
    MalformedResponse { reason: String },
}

impl TranslatorError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        TranslatorError::MalformedResponse {
            reason: reason.into(),
        }
    }
}
