//! Translation-tree engine.
//!
//! Everything in here works on in-memory values only. Reading files, talking to a
//! translation service and printing reports are the job of the callers.
//!
//! ## Pipeline
//!
//! ```text
//! TranslationTree --flatten--> FlattenedLanguageMap --find_missing_keys--> MissingKeyReport
//!                                      |
//!                          seed + Translator + merge_flat
//!                                      |
//!                                  unflatten --> TranslationTree
//! ```

pub mod diff;
pub mod error;
pub mod flatten;
pub mod merge;
pub mod orchestrator;
pub mod tree;

pub use diff::{MissingKeyReport, find_missing_keys};
pub use error::{SkippedKey, TranslateError, TreeError};
pub use flatten::{flatten, unflatten};
pub use merge::{deep_merge, merge_flat};
pub use orchestrator::{TranslationOrchestrator, Translated, build_seed, detect_missing};
pub use tree::{Branch, FlattenedLanguageMap, LeafMap, Node, TranslationTree};
