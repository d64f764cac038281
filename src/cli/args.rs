//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `missing`: Report translation keys missing in some languages
//! - `translate`: Translate existing keys into every language of the file
//! - `init`: Initialize the configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::source::ResourceFormat;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Missing(cmd)) => cmd.common.verbose,
            Some(Command::Translate(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by the file-processing commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Files or directories to process (directories are searched for .vue files)
    #[arg(required = true, value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Format of <i18n> blocks without a lang attribute (overrides config file)
    #[arg(short = 'l', long, value_enum)]
    pub default_format: Option<ResourceFormat>,

    /// Print each file name before its results
    #[arg(short = 'f', long)]
    pub print_file: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct MissingCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    /// Key to translate as <lang>.<key>, e.g. en.menu.save (repeatable)
    #[arg(short = 'k', long = "key", value_name = "LANG.KEY", required = true)]
    pub keys: Vec<String>,

    /// Model used for translation (overrides config file)
    #[arg(long, env = "AI_MODEL_NAME")]
    pub model: Option<String>,

    /// API key for the translation service
    #[arg(long, env = "GOOGLE_AI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Print the updated translations instead of writing files
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report translation keys that are missing in some languages
    Missing(MissingCommand),
    /// Translate existing keys into every language found in each file
    Translate(TranslateCommand),
    /// Initialize a new .i18nfillrc.json configuration file
    Init,
}
