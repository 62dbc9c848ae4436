pub mod cache;
pub mod helper;
pub mod init;
pub mod report;
pub mod scan;

use std::path::PathBuf;

use crate::{
    cache::CacheEntries,
    scan::{FileOutcome, FoundFixme, ScanResult},
};

#[derive(Debug)]
pub enum CommandSummary {
    Report(ScanResult<FileOutcome>),
    Scan(ScanResult<FoundFixme>),
    CacheList(CacheSummary),
    CacheClear(CacheSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CacheSummary {
    /// Backing file, or `None` when no `cacheLocation` is configured.
    pub path: Option<PathBuf>,
    /// Entries as they were before the command ran.
    pub entries: CacheEntries,
}

impl CacheSummary {
    pub fn issue_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running fixit commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Issues that the tracker did not accept. Non-zero means exit code 1.
    pub failed_count: usize,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        let failed_count = match &summary {
            CommandSummary::Report(result) => result
                .items
                .iter()
                .filter(|item| item.outcome.is_failed())
                .count(),
            _ => 0,
        };
        Self {
            summary,
            failed_count,
        }
    }
}
