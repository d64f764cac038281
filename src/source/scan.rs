//! Expansion of CLI path arguments into resource files.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use glob::Pattern;
use tracing::warn;
use walkdir::WalkDir;

const SKIPPED_DIRS: &[&str] = &["node_modules", ".git"];

/// Result of scanning paths.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Files to process, sorted and de-duplicated.
    pub files: Vec<PathBuf>,
    /// Entries that could not be read while walking directories.
    pub skipped_count: usize,
}

/// Collect resource files from `paths`.
///
/// Files are taken as given. Directories are walked for `.vue` components;
/// `node_modules` and `.git` are never entered. Paths matching one of
/// `ignore_patterns` are left out in both cases.
pub fn collect_resource_files(paths: &[PathBuf], ignore_patterns: &[String]) -> ScanResult {
    let patterns: Vec<Pattern> = ignore_patterns
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                warn!(pattern = %p, error = %e, "invalid ignore pattern");
                None
            }
        })
        .collect();
    let is_ignored = |path: &Path| {
        let path_str = path.to_string_lossy();
        patterns.iter().any(|p| p.matches(&path_str))
    };

    let mut files = BTreeSet::new();
    let mut skipped_count = 0;

    for path in paths {
        if !path.is_dir() {
            if !is_ignored(path) {
                files.insert(path.clone());
            }
            continue;
        }

        let walker = WalkDir::new(path).into_iter().filter_entry(|entry| {
            !(entry.file_type().is_dir()
                && entry.depth() > 0
                && entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| SKIPPED_DIRS.contains(&name)))
        });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    skipped_count += 1;
                    warn!(error = %e, "cannot access path");
                    continue;
                }
            };
            let entry_path = entry.path();
            if entry.file_type().is_file() && is_component(entry_path) && !is_ignored(entry_path) {
                files.insert(entry_path.to_path_buf());
            }
        }
    }

    ScanResult {
        files: files.into_iter().collect(),
        skipped_count,
    }
}

fn is_component(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("vue")
}
