use serde::{Deserialize, Serialize};

/// An issue discovered in source code, in the shape the tracker accepts.
///
/// Equality is structural over `title` and `body`; this is what the cache
/// uses to decide whether an issue was already filed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IssueRecord {
    pub title: String,
    pub body: String,
}

impl IssueRecord {
    /// Build a record, falling back to the title when the body is empty.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        let title = title.into();
        let body = body.into();
        let body = if body.is_empty() { title.clone() } else { body };
        Self { title, body }
    }
}

/// A FIXME found in a file: the issue plus the line of its anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixme {
    /// 1-based line number of the `FIXME:` marker.
    pub line: usize,
    pub issue: IssueRecord,
}
