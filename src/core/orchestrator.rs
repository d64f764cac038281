//! Detect-missing and auto-translate use cases.

use indexmap::IndexSet;
use tracing::{debug, warn};

use super::{
    diff::{MissingKeyReport, find_missing_keys},
    error::{SkippedKey, TranslateError},
    flatten::{flatten, unflatten},
    merge::merge_flat,
    tree::{FlattenedLanguageMap, LeafMap, TranslationTree},
};
use crate::translator::Translator;

/// Keys each language of `tree` lacks.
pub fn detect_missing(tree: &TranslationTree) -> MissingKeyReport {
    find_missing_keys(&flatten(tree))
}

/// Result of a successful [`TranslationOrchestrator::auto_translate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Translated {
    /// The updated tree, ready to be written back.
    pub tree: TranslationTree,
    /// Values that were sent for translation.
    pub seed: FlattenedLanguageMap,
    /// Requested key paths that were ignored.
    pub skipped: Vec<SkippedKey>,
}

impl Translated {
    pub fn seeded_key_count(&self) -> usize {
        self.seed.values().map(LeafMap::len).sum()
    }
}

/// Pick the requested `<lang>.<dotted.key>` values out of a flattened tree.
///
/// Entries without a language segment, or naming a language or key the tree
/// does not have, are skipped and returned alongside the seed.
pub fn build_seed(
    flat: &FlattenedLanguageMap,
    requested: &[String],
) -> (FlattenedLanguageMap, Vec<SkippedKey>) {
    let mut seed = FlattenedLanguageMap::new();
    let mut skipped = Vec::new();

    for path in requested {
        let Some((language, key)) = path.split_once('.') else {
            warn!(key_path = %path, "invalid key path, expected <lang>.<key>");
            skipped.push(SkippedKey::MalformedKeyPath {
                requested: path.clone(),
            });
            continue;
        };

        let Some(value) = flat.get(language).and_then(|leaves| leaves.get(key)) else {
            warn!(language, key, "key to translate not found");
            skipped.push(SkippedKey::KeyNotFound {
                language: language.to_string(),
                key: key.to_string(),
            });
            continue;
        };

        seed.entry(language.to_string())
            .or_default()
            .insert(key.to_string(), value.clone());
    }

    (seed, skipped)
}

/// Runs the translation workflow for one tree at a time.
#[derive(Debug)]
pub struct TranslationOrchestrator<T> {
    translator: T,
}

impl<T: Translator> TranslationOrchestrator<T> {
    pub fn new(translator: T) -> Self {
        Self { translator }
    }

    pub fn translator(&self) -> &T {
        &self.translator
    }

    /// Translate the requested keys into every language of `tree`.
    ///
    /// On error the input tree is left as it is and no new tree is produced.
    pub async fn auto_translate(
        &self,
        tree: &TranslationTree,
        requested: &[String],
    ) -> Result<Translated, TranslateError> {
        let flat = flatten(tree);
        let detected_languages: Vec<String> = flat.keys().cloned().collect();

        let (seed, skipped) = build_seed(&flat, requested);

        if seed.is_empty() {
            warn!("no keys to translate");
            return Err(TranslateError::NothingToTranslate);
        }

        if let [only] = detected_languages.as_slice()
            && seed.len() == 1
            && seed.contains_key(only)
        {
            warn!(language = %only, "no languages to translate to");
            return Err(TranslateError::NoTargetLanguages {
                language: only.clone(),
            });
        }

        debug!(
            seed_languages = seed.len(),
            targets = ?detected_languages,
            "calling translator"
        );
        let translated = self
            .translator
            .translate(&seed, &detected_languages)
            .await?;
        let translated = retain_translated_keys(translated, &seed, &detected_languages);

        let merged = merge_flat(&flat, &translated);

        Ok(Translated {
            tree: unflatten(&merged),
            seed,
            skipped,
        })
    }
}

/// Keep only the seeded keys in the languages of the tree.
///
/// Anything else the translator sends back is dropped with a warning, so a
/// stray key can never overwrite a group the caller did not ask for.
fn retain_translated_keys(
    mut translated: FlattenedLanguageMap,
    seed: &FlattenedLanguageMap,
    targets: &[String],
) -> FlattenedLanguageMap {
    let seeded_keys: IndexSet<&str> = seed
        .values()
        .flat_map(|leaves| leaves.keys().map(String::as_str))
        .collect();

    translated.retain(|language, leaves| {
        if !targets.contains(language) {
            warn!(language = %language, "translator returned a language not present in the tree, ignoring it");
            return false;
        }
        leaves.retain(|key, _| {
            let seeded = seeded_keys.contains(key.as_str());
            if !seeded {
                warn!(language = %language, key = %key, "translator returned a key that was not requested, ignoring it");
            }
            seeded
        });
        true
    });

    for target in targets {
        if !translated.contains_key(target) {
            warn!(language = %target, "translator returned nothing for language");
        }
    }

    translated
}
