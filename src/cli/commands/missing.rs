use anyhow::Result;

use super::super::args::MissingCommand;
use super::helper::{CommandContext, load_tree};
use super::{CommandResult, CommandSummary, FileError, FileMissingKeys, MissingSummary};
use crate::core::detect_missing;

pub fn missing(cmd: MissingCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;

    let mut files = Vec::new();
    let mut file_errors = Vec::new();

    for path in &ctx.files {
        match load_tree(path, ctx.default_format) {
            Ok((_, tree)) => files.push(FileMissingKeys {
                path: path.clone(),
                report: detect_missing(&tree),
            }),
            Err(e) => file_errors.push(FileError::new(path, &e)),
        }
    }

    let incomplete = files.iter().filter(|f| !f.report.is_complete()).count();

    Ok(CommandResult {
        error_count: incomplete + file_errors.len(),
        files_checked: ctx.files.len(),
        print_file: ctx.print_file,
        summary: CommandSummary::Missing(MissingSummary { files }),
        file_errors,
    })
}
