use anyhow::Result;

use super::{CommandResult, CommandSummary, helper::open_workspace};
use crate::{cli::args::ScanArgs, scan::Scanner};

/// List every FIXME without touching the network.
pub fn scan(args: ScanArgs) -> Result<CommandResult> {
    let workspace = open_workspace(&args.common)?;
    let result = Scanner::new(&workspace).collect()?;
    Ok(CommandResult::new(CommandSummary::Scan(result)))
}
