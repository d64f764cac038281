//! Loading translation trees from files and writing them back.
//!
//! Two kinds of files are supported:
//!
//! - Vue single-file components, whose `<i18n>` custom block holds the tree
//!   (`lang` attribute selects JSON or YAML, falling back to a default)
//! - standalone `.json` / `.yaml` / `.yml` files holding the tree as a whole

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow, bail};
use tracing::info;

use crate::core::TranslationTree;

mod format;
pub mod scan;
pub mod sfc;

pub use format::ResourceFormat;
pub use scan::{ScanResult, collect_resource_files};
use sfc::{I18nBlock, find_i18n_block, replace_block_content};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Embedding {
    Component(I18nBlock),
    Standalone,
}

/// A file containing one translation tree.
#[derive(Debug)]
pub struct ResourceFile {
    path: PathBuf,
    content: String,
    format: ResourceFormat,
    embedding: Embedding,
}

impl ResourceFile {
    pub fn load(path: &Path, default_format: ResourceFormat) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Self::from_content(path, content, default_format)
    }

    /// Build from already-read content. `path` decides between a standalone
    /// resource and a component.
    pub fn from_content(
        path: &Path,
        content: String,
        default_format: ResourceFormat,
    ) -> Result<Self> {
        if let Some(format) = ResourceFormat::from_extension(path) {
            return Ok(Self {
                path: path.to_path_buf(),
                content,
                format,
                embedding: Embedding::Standalone,
            });
        }

        let Some(block) = find_i18n_block(&content) else {
            bail!("i18n block not found");
        };
        let format = match &block.lang {
            Some(lang) => ResourceFormat::from_lang_attr(lang)
                .ok_or_else(|| anyhow!("Unknown i18n block language: \"{}\"", lang))?,
            None => default_format,
        };

        Ok(Self {
            path: path.to_path_buf(),
            content,
            format,
            embedding: Embedding::Component(block),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> ResourceFormat {
        self.format
    }

    /// The serialized tree as found in the file.
    pub fn raw_tree(&self) -> &str {
        match &self.embedding {
            Embedding::Component(block) => &self.content[block.content.clone()],
            Embedding::Standalone => &self.content,
        }
    }

    pub fn tree(&self) -> Result<TranslationTree> {
        let raw = self.raw_tree();
        let value = if raw.trim().is_empty() {
            serde_json::Value::Null
        } else {
            self.format.parse(raw)?
        };
        Ok(TranslationTree::from_value(value)?)
    }

    /// Serialize `tree` in this file's format.
    pub fn render_tree(&self, tree: &TranslationTree) -> Result<String> {
        self.format.render(&tree.to_value())
    }

    /// Full file content with `tree` in place of the original one.
    pub fn render_with(&self, tree: &TranslationTree) -> Result<String> {
        let rendered = self.render_tree(tree)?;
        Ok(match &self.embedding {
            Embedding::Component(block) => replace_block_content(&self.content, block, &rendered),
            Embedding::Standalone => format!("{}\n", rendered),
        })
    }

    pub fn save(&self, tree: &TranslationTree) -> Result<()> {
        let content = self.render_with(tree)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write file: {}", self.path.display()))?;
        info!(path = %self.path.display(), "saved translations");
        Ok(())
    }
}
