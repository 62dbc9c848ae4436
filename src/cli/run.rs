use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, cache::cache, init::init, report::report, scan::scan},
};

/// Dispatch to the command handler named by the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` once the command ran, even if some issues failed to file
/// - `Err` if the command could not run (no repository, bad config, no credentials)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Report(args)) => report(args),
        Some(Command::Scan(args)) => scan(args),
        Some(Command::Cache(cmd)) => cache(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
