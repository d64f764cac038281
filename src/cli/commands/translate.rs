use anyhow::Result;

use super::super::args::TranslateCommand;
use super::helper::{CommandContext, load_tree};
use super::{
    CommandResult, CommandSummary, FileError, FileTranslation, TranslateSummary,
    TranslationOutcome,
};
use crate::{
    core::TranslationOrchestrator,
    translator::{GeminiTranslator, TranslatorConfig},
};

pub fn translate(cmd: TranslateCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;

    let translator = GeminiTranslator::new(TranslatorConfig {
        api_key: cmd.api_key.clone(),
        model: cmd.model.clone().unwrap_or_else(|| ctx.config.model.clone()),
        endpoint: ctx.config.endpoint.clone(),
        timeout_secs: ctx.config.timeout_secs,
    })?;
    let orchestrator = TranslationOrchestrator::new(translator);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut files = Vec::new();
    let mut file_errors = Vec::new();

    // One file at a time: each tree is fully translated and written before the next.
    for path in &ctx.files {
        let (file, tree) = match load_tree(path, ctx.default_format) {
            Ok(loaded) => loaded,
            Err(e) => {
                file_errors.push(FileError::new(path, &e));
                continue;
            }
        };

        let translated = match runtime.block_on(orchestrator.auto_translate(&tree, &cmd.keys)) {
            Ok(translated) => translated,
            Err(e) => {
                files.push(FileTranslation {
                    path: path.clone(),
                    outcome: TranslationOutcome::Failed {
                        reason: e.to_string(),
                    },
                });
                continue;
            }
        };
        let translated_keys = translated.seeded_key_count();

        let outcome = if cmd.dry_run {
            file.render_tree(&translated.tree)
                .map(|rendered| TranslationOutcome::Preview {
                    translated_keys,
                    skipped: translated.skipped,
                    rendered,
                })
        } else {
            file.save(&translated.tree)
                .map(|()| TranslationOutcome::Written {
                    translated_keys,
                    skipped: translated.skipped,
                })
        };

        match outcome {
            Ok(outcome) => files.push(FileTranslation {
                path: path.clone(),
                outcome,
            }),
            Err(e) => file_errors.push(FileError::new(path, &e)),
        }
    }

    let failed = files.iter().filter(|f| f.outcome.is_failure()).count();

    Ok(CommandResult {
        error_count: failed + file_errors.len(),
        files_checked: ctx.files.len(),
        print_file: ctx.print_file,
        summary: CommandSummary::Translate(TranslateSummary {
            files,
            dry_run: cmd.dry_run,
        }),
        file_errors,
    })
}
