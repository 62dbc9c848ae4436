//! Scan orchestration.
//!
//! Walks the tracked files of a workspace, extracts FIXMEs from each
//! supported source file and, when reporting, files every FIXME through the
//! session. Files that cannot be read are skipped; only failing to list the
//! tracked files aborts a scan.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use log::debug;

use crate::{
    core::{CommentStyle, Fixme, IssueRecord, find_fixmes},
    reporter::Outcome,
    session::{Session, Workspace},
};

/// A FIXME and the file it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundFixme {
    /// Path relative to the working-tree root.
    pub path: PathBuf,
    pub line: usize,
    pub issue: IssueRecord,
}

/// The outcome of reporting one FIXME.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub fixme: FoundFixme,
    pub outcome: Outcome,
}

/// Everything a scan found, in file-then-line order.
#[derive(Debug)]
pub struct ScanResult<T> {
    pub items: Vec<T>,
    /// Source files that were read and searched.
    pub files_scanned: usize,
    /// Source files that could not be read.
    pub files_skipped: usize,
}

pub struct Scanner<'a> {
    workspace: &'a Workspace,
    ignores: Vec<Pattern>,
}

impl<'a> Scanner<'a> {
    pub fn new(workspace: &'a Workspace) -> Self {
        Self {
            workspace,
            ignores: workspace.config.ignore_patterns(),
        }
    }

    /// Find every FIXME without reporting anything.
    pub fn collect(&self) -> Result<ScanResult<FoundFixme>> {
        self.scan(|fixme| fixme)
    }

    /// Find every FIXME and report each one through `session`.
    pub fn run(&self, session: &mut Session) -> Result<ScanResult<FileOutcome>> {
        self.scan(|fixme| {
            let outcome = session.report(&fixme.issue);
            FileOutcome { fixme, outcome }
        })
    }

    fn scan<T>(&self, mut visit: impl FnMut(FoundFixme) -> T) -> Result<ScanResult<T>> {
        let mut result = ScanResult {
            items: Vec::new(),
            files_scanned: 0,
            files_skipped: 0,
        };

        for (path, style) in self.source_files()? {
            let Some(fixmes) = self.scan_file(&path, style) else {
                result.files_skipped += 1;
                continue;
            };
            result.files_scanned += 1;

            for Fixme { line, issue } in fixmes {
                let found = FoundFixme {
                    path: path.clone(),
                    line,
                    issue,
                };
                result.items.push(visit(found));
            }
        }

        Ok(result)
    }

    /// Tracked files of a supported kind that are not ignored, sorted by path.
    ///
    /// A conflicted path is listed once per index stage; it is scanned once.
    fn source_files(&self) -> Result<Vec<(PathBuf, CommentStyle)>> {
        let mut files: Vec<(PathBuf, CommentStyle)> = self
            .workspace
            .vcs
            .tracked_files()
            .context("Failed to list tracked files")?
            .into_iter()
            .filter(|path| !self.is_ignored(path))
            .filter_map(|path| CommentStyle::from_path(&path).map(|style| (path, style)))
            .collect();
        files.sort_by(|a, b| a.0.cmp(&b.0));
        files.dedup_by(|a, b| a.0 == b.0);
        Ok(files)
    }

    fn is_ignored(&self, path: &Path) -> bool {
        self.ignores.iter().any(|pattern| pattern.matches_path(path))
    }

    /// FIXMEs in one file, or `None` if it is not a readable regular file.
    fn scan_file(&self, path: &Path, style: CommentStyle) -> Option<Vec<Fixme>> {
        let full_path = self.workspace.root().join(path);
        if !full_path.is_file() {
            debug!("Skipping {}: not a regular file", path.display());
            return None;
        }

        let bytes = match fs::read(&full_path) {
            Ok(bytes) => bytes,
            Err(err) => {
                debug!("Skipping {}: {}", path.display(), err);
                return None;
            }
        };
        let Ok(source) = String::from_utf8(bytes) else {
            debug!("Skipping {}: not valid UTF-8", path.display());
            return None;
        };

        Some(find_fixmes(&source, style))
    }
}
