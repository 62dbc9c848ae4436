//! Remote issue trackers.

mod github;

use serde::Deserialize;
use thiserror::Error;

use crate::{core::IssueRecord, vcs::RemoteIdentity};

pub use github::GitHubTracker;

/// The issue as created by the tracker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreatedIssue {
    #[serde(default)]
    pub number: Option<u64>,
    #[serde(default)]
    pub html_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// The request never got a response.
    #[error("network error: {0}")]
    Network(String),
    /// The tracker answered with anything but `201 Created`.
    #[error("rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
}

/// Something issues can be filed against.
pub trait IssueTracker {
    /// File `issue` on the repository identified by `identity`.
    ///
    /// A single attempt: implementations do not retry.
    fn create_issue(
        &self,
        identity: &RemoteIdentity,
        issue: &IssueRecord,
    ) -> Result<CreatedIssue, TrackerError>;
}

impl<T: IssueTracker + ?Sized> IssueTracker for Box<T> {
    fn create_issue(
        &self,
        identity: &RemoteIdentity,
        issue: &IssueRecord,
    ) -> Result<CreatedIssue, TrackerError> {
        (**self).create_issue(identity, issue)
    }
}
