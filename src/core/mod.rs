//! Pure extraction engine: no I/O, no network.
//!
//! - `comment_style`: line-comment syntaxes, selected by file extension
//! - `extract`: turns file content into FIXME issue records
//! - `issue`: the issue record and its located form

mod comment_style;
mod extract;
mod issue;

pub use comment_style::CommentStyle;
pub use extract::{FIXME_MARKER, extract_fixmes, find_fixmes};
pub use issue::{Fixme, IssueRecord};
