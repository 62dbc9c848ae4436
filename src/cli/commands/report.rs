use anyhow::Result;

use super::{CommandResult, CommandSummary, helper::open_workspace};
use crate::{
    cli::args::ReportArgs, credentials::CredentialSources, scan::Scanner, session::Session,
};

/// Scan the tracked files and file every FIXME not filed before.
pub fn report(args: ReportArgs) -> Result<CommandResult> {
    let workspace = open_workspace(&args.common)?;
    let sources = CredentialSources::from_env(args.username, args.password);
    let mut session = Session::open(&workspace, &sources)?;

    let result = Scanner::new(&workspace).run(&mut session)?;
    Ok(CommandResult::new(CommandSummary::Report(result)))
}
