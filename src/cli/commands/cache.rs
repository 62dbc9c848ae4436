use anyhow::{Context, Result};

use super::{CacheSummary, CommandResult, CommandSummary, helper::open_workspace};
use crate::cli::args::{CacheCommand, CommonArgs};

pub fn cache(cmd: CacheCommand) -> Result<CommandResult> {
    match cmd {
        CacheCommand::List(common) => list(&common),
        CacheCommand::Clear(common) => clear(&common),
    }
}

fn list(common: &CommonArgs) -> Result<CommandResult> {
    let workspace = open_workspace(common)?;
    let cache = workspace.load_cache();

    Ok(CommandResult::new(CommandSummary::CacheList(CacheSummary {
        path: cache.path().map(|p| p.to_path_buf()),
        entries: cache.entries().clone(),
    })))
}

fn clear(common: &CommonArgs) -> Result<CommandResult> {
    let workspace = open_workspace(common)?;
    let mut cache = workspace.load_cache();
    let summary = CacheSummary {
        path: cache.path().map(|p| p.to_path_buf()),
        entries: cache.entries().clone(),
    };

    cache.clear().context("Failed to clear the cache")?;
    Ok(CommandResult::new(CommandSummary::CacheClear(summary)))
}
