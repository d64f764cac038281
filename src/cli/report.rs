//! Report formatting and printing utilities.
//!
//! Separate from command logic so results can be rendered to any writer.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandResult, CommandSummary, FileError, FileMissingKeys, FileTranslation, InitSummary,
    MissingSummary, TranslateSummary, TranslationOutcome,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::SkippedKey;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result to stdout, and file errors to stderr.
pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock(), &mut io::stderr().lock());
}

/// Print a command result to custom writers.
pub fn print_to<W: Write, E: Write>(result: &CommandResult, out: &mut W, err: &mut E) {
    print_file_errors(&result.file_errors, err);

    match &result.summary {
        CommandSummary::Missing(summary) => print_missing(summary, result, out),
        CommandSummary::Translate(summary) => print_translate(summary, result, out),
        CommandSummary::Init(summary) => print_init(summary, out, err),
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

fn print_file_errors<E: Write>(errors: &[FileError], err: &mut E) {
    for error in errors {
        let _ = writeln!(
            err,
            "{}: {}: {}",
            "error".bold().red(),
            error.path.display(),
            error.message
        );
    }
}

fn print_missing<W: Write>(summary: &MissingSummary, result: &CommandResult, out: &mut W) {
    for file in &summary.files {
        print_file_missing(file, result.print_file, out);
    }

    let incomplete: Vec<&FileMissingKeys> = summary
        .files
        .iter()
        .filter(|f| !f.report.is_complete())
        .collect();

    if incomplete.is_empty() {
        if result.file_errors.is_empty() {
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Checked {} - no missing keys",
                    plural(result.files_checked, "file")
                )
                .green()
            );
        }
    } else {
        let total: usize = incomplete.iter().map(|f| f.report.total()).sum();
        let _ = writeln!(
            out,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "Found {} in {} of {}",
                plural(total, "missing key"),
                incomplete.len(),
                plural(result.files_checked, "file")
            )
            .red()
            .bold()
        );
    }
}

fn print_file_missing<W: Write>(file: &FileMissingKeys, print_file: bool, out: &mut W) {
    if file.report.is_complete() {
        if print_file {
            let _ = writeln!(out, "{} {}", SUCCESS_MARK.green(), file.path.display());
        }
        return;
    }

    let _ = writeln!(
        out,
        "{} {}",
        FAILURE_MARK.red(),
        file.path.display().to_string().bold()
    );

    let incomplete: Vec<(&str, &[String])> = file
        .report
        .iter()
        .filter(|(_, keys)| !keys.is_empty())
        .collect();
    let width = incomplete
        .iter()
        .map(|(language, _)| language.width())
        .max()
        .unwrap_or(0);

    for (language, keys) in incomplete {
        let padding = " ".repeat(width - language.width());
        let _ = writeln!(
            out,
            "  {}{}  {}",
            language.cyan().bold(),
            padding,
            keys.join(", ")
        );
    }
}

fn print_translate<W: Write>(summary: &TranslateSummary, result: &CommandResult, out: &mut W) {
    for file in &summary.files {
        print_file_translation(file, out);
    }

    let done = summary
        .files
        .iter()
        .filter(|f| !f.outcome.is_failure())
        .count();
    let failed = summary.files.len() - done;

    let line = if summary.dry_run {
        format!(
            "Dry run: {} of {} would be updated",
            done,
            plural(result.files_checked, "file")
        )
    } else {
        format!("Updated {} of {}", done, plural(result.files_checked, "file"))
    };

    if result.error_count == 0 {
        let _ = writeln!(out, "{} {}", SUCCESS_MARK.green(), line.green());
    } else {
        let _ = writeln!(
            out,
            "{} {}",
            FAILURE_MARK.red(),
            format!("{}, {} not translated", line, plural(failed + result.file_errors.len(), "file"))
                .red()
                .bold()
        );
    }
}

fn print_file_translation<W: Write>(file: &FileTranslation, out: &mut W) {
    let path = file.path.display();
    match &file.outcome {
        TranslationOutcome::Written {
            translated_keys,
            skipped,
        } => {
            let _ = writeln!(
                out,
                "{} {}  translated {}",
                SUCCESS_MARK.green(),
                path.to_string().bold(),
                plural(*translated_keys, "key")
            );
            print_skipped(skipped, out);
        }
        TranslationOutcome::Preview {
            translated_keys,
            skipped,
            rendered,
        } => {
            let _ = writeln!(
                out,
                "{} {}  would translate {}",
                SUCCESS_MARK.green(),
                path.to_string().bold(),
                plural(*translated_keys, "key")
            );
            print_skipped(skipped, out);
            let _ = writeln!(out, "{}", rendered);
        }
        TranslationOutcome::Failed { reason } => {
            let _ = writeln!(
                out,
                "{} {}  {}",
                FAILURE_MARK.red(),
                path.to_string().bold(),
                reason
            );
        }
    }
}

fn print_skipped<W: Write>(skipped: &[SkippedKey], out: &mut W) {
    for key in skipped {
        let _ = writeln!(out, "  {} skipped {}", "warning:".bold().yellow(), key);
    }
}

fn print_init<W: Write, E: Write>(summary: &InitSummary, out: &mut W, err: &mut E) {
    if let Some(error) = &summary.error {
        let _ = writeln!(err, "{}: {}", "error".bold().red(), error);
    } else if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}
