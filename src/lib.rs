//! i18n-fill - find and fill missing translations in Vue i18n resources
//!
//! i18n-fill is a CLI tool and library for keeping multi-language translation
//! trees complete. It reports keys that some languages lack and fills them in
//! through an AI translation backend, merging results into the existing tree.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Tree flattening, missing-key detection, merging and orchestration
//! - `source`: Reading and writing `<i18n>` blocks and standalone resource files
//! - `translator`: The translation backend seam and its Gemini implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod source;
pub mod translator;
