use std::path::{Path, PathBuf};

use crate::core::{MissingKeyReport, SkippedKey};

#[derive(Debug)]
pub enum CommandSummary {
    Missing(MissingSummary),
    Translate(TranslateSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct MissingSummary {
    pub files: Vec<FileMissingKeys>,
}

#[derive(Debug)]
pub struct FileMissingKeys {
    pub path: PathBuf,
    pub report: MissingKeyReport,
}

#[derive(Debug)]
pub struct TranslateSummary {
    pub files: Vec<FileTranslation>,
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct FileTranslation {
    pub path: PathBuf,
    pub outcome: TranslationOutcome,
}

#[derive(Debug)]
pub enum TranslationOutcome {
    /// The file was rewritten.
    Written {
        translated_keys: usize,
        skipped: Vec<SkippedKey>,
    },
    /// Dry run: the serialized tree that would have been written.
    Preview {
        translated_keys: usize,
        skipped: Vec<SkippedKey>,
        rendered: String,
    },
    /// The tree was left untouched.
    Failed { reason: String },
}

impl TranslationOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, TranslationOutcome::Failed { .. })
    }
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// A file that could not be read, parsed or written.
#[derive(Debug, Clone)]
pub struct FileError {
    pub path: PathBuf,
    pub message: String,
}

impl FileError {
    pub fn new(path: &Path, error: &anyhow::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            message: format!("{:#}", error),
        }
    }
}

/// Result of running a command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Files with missing keys, failed translations, file errors and init failures.
    pub error_count: usize,
    /// Files that could not be processed at all.
    pub file_errors: Vec<FileError>,
    /// Number of resource files processed.
    pub files_checked: usize,
    /// Name every processed file in the output, even when it has nothing to report.
    pub print_file: bool,
}
