use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Serialization format of a translation resource.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ResourceFormat {
    #[default]
    Json,
    Yaml,
}

impl ResourceFormat {
    /// Format named by an `<i18n lang="...">` attribute.
    pub fn from_lang_attr(lang: &str) -> Option<Self> {
        match lang {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Format implied by a standalone file's extension.
    pub fn from_extension(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_lang_attr)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    pub fn parse(self, content: &str) -> Result<Value> {
        match self {
            Self::Json => serde_json::from_str(content).context("Failed to parse JSON"),
            Self::Yaml => serde_yaml::from_str(content).context("Failed to parse YAML"),
        }
    }

    /// Serialize without a trailing newline. JSON uses 2-space indentation.
    pub fn render(self, value: &Value) -> Result<String> {
        let rendered = match self {
            Self::Json => serde_json::to_string_pretty(value).context("Failed to serialize JSON")?,
            Self::Yaml => serde_yaml::to_string(value).context("Failed to serialize YAML")?,
        };
        Ok(rendered.trim_end().to_string())
    }
}
