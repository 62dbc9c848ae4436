//! Persistent record of issues that the tracker has already accepted.
//!
//! The cache is a JSON object keyed by repository name, each value being the
//! list of submitted `{"title", "body"}` payloads. It is read once when a
//! session starts and rewritten as a whole after every change. There is no
//! locking: two concurrent runs against the same file race, and the last
//! writer wins.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, warn};
use thiserror::Error;

use crate::core::IssueRecord;

pub type CacheEntries = BTreeMap<String, Vec<IssueRecord>>;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("failed to write cache file {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to serialize cache: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Default)]
pub struct IssueCache {
    /// Backing file. `None` keeps the cache in memory only.
    path: Option<PathBuf>,
    entries: CacheEntries,
}

impl IssueCache {
    /// A cache that is never persisted.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load the cache stored at `path`.
    ///
    /// With no path the cache lives in memory only. A missing file is created
    /// empty. Unreadable or malformed content is treated as an empty cache.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::in_memory();
        };

        let exists = path.exists();
        let cache = Self {
            path: Some(path.to_path_buf()),
            entries: if exists {
                read_entries(path)
            } else {
                CacheEntries::new()
            },
        };

        if !exists && let Err(err) = cache.persist() {
            warn!("{}", err);
        }
        cache
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn entries(&self) -> &CacheEntries {
        &self.entries
    }

    /// True if `issue` was already submitted to `repo`.
    pub fn contains(&self, repo: &str, issue: &IssueRecord) -> bool {
        self.entries
            .get(repo)
            .is_some_and(|issues| issues.contains(issue))
    }

    /// Remember `issue` for `repo` and rewrite the backing file.
    ///
    /// The in-memory entry is kept even if writing fails.
    pub fn append(&mut self, repo: &str, issue: IssueRecord) -> Result<(), CacheError> {
        self.entries.entry(repo.to_string()).or_default().push(issue);
        self.persist()
    }

    /// Forget every submitted issue.
    pub fn clear(&mut self) -> Result<(), CacheError> {
        self.entries.clear();
        self.persist()
    }

    fn persist(&self) -> Result<(), CacheError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let content = serde_json::to_string_pretty(&self.entries)?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| CacheError::Write {
                path: path.clone(),
                source,
            })?;
        }
        fs::write(path, content).map_err(|source| CacheError::Write {
            path: path.clone(),
            source,
        })?;
        debug!("Wrote cache file {}", path.display());
        Ok(())
    }
}

fn read_entries(path: &Path) -> CacheEntries {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            warn!(
                "Could not read cache file {}: {}; starting with an empty cache",
                path.display(),
                err
            );
            return CacheEntries::new();
        }
    };

    if content.trim().is_empty() {
        return CacheEntries::new();
    }

    match serde_json::from_str(&content) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(
                "Cache file {} is corrupt ({}); starting with an empty cache",
                path.display(),
                err
            );
            CacheEntries::new()
        }
    }
}
