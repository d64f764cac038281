use super::{
    args::{Arguments, Command},
    commands::{CommandResult, init::init, missing::missing, translate::translate},
};
use anyhow::Result;

/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with per-file results and the error count
/// - `Err` if the command fails as a whole (e.g., invalid config file)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Missing(cmd)) => missing(cmd),
        Some(Command::Translate(cmd)) => translate(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
