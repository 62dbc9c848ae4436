//! At-most-once issue submission.
//!
//! An issue is posted only if the cache does not already hold it for the
//! repository, and it enters the cache only after the tracker accepted it.
//! A failed submission is left uncached so the next run tries again.

use std::fmt;

use log::{debug, warn};

use crate::{
    cache::IssueCache,
    core::IssueRecord,
    tracker::{CreatedIssue, IssueTracker, TrackerError},
    vcs::RemoteIdentity,
};

/// Result of one reporting attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The tracker created the issue.
    Submitted(CreatedIssue),
    /// The issue was filed by an earlier run.
    Skipped,
    /// Submission failed; the issue will be retried on the next run.
    Failed(TrackerError),
}

impl Outcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Submitted(created) => match (&created.number, &created.html_url) {
                (_, Some(url)) => write!(f, "submitted {}", url),
                (Some(number), None) => write!(f, "submitted #{}", number),
                (None, None) => write!(f, "submitted"),
            },
            Outcome::Skipped => write!(f, "already cached"),
            Outcome::Failed(err) => write!(f, "failed: {}", err),
        }
    }
}

pub struct Reporter<T: IssueTracker> {
    tracker: T,
    cache: IssueCache,
}

impl<T: IssueTracker> Reporter<T> {
    pub fn new(tracker: T, cache: IssueCache) -> Self {
        Self { tracker, cache }
    }

    pub fn cache(&self) -> &IssueCache {
        &self.cache
    }

    /// File `issue` against `identity` unless it was filed before.
    pub fn report(&mut self, identity: &RemoteIdentity, issue: &IssueRecord) -> Outcome {
        if self.cache.contains(&identity.repo_name, issue) {
            debug!("Skipping \"{}\": already filed", issue.title);
            return Outcome::Skipped;
        }

        match self.tracker.create_issue(identity, issue) {
            Ok(created) => {
                if let Err(err) = self.cache.append(&identity.repo_name, issue.clone()) {
                    warn!(
                        "Issue \"{}\" was filed but could not be cached: {}",
                        issue.title, err
                    );
                }
                Outcome::Submitted(created)
            }
            Err(err) => {
                warn!("Could not file \"{}\": {}", issue.title, err);
                Outcome::Failed(err)
            }
        }
    }
}
