//! FIXME comment extraction.
//!
//! A FIXME anchor is a comment line whose text starts with `FIXME: `. The text
//! after the marker is the issue title; the comment lines directly below it
//! form the body. A non-comment line (blank lines included), another anchor,
//! or the end of the file ends the body.

use super::{CommentStyle, Fixme, IssueRecord};

/// The literal, case-sensitive marker that opens an issue.
pub const FIXME_MARKER: &str = "FIXME: ";

/// Extract every FIXME in `source` as an issue record, in file order.
pub fn extract_fixmes(source: &str, style: CommentStyle) -> Vec<IssueRecord> {
    find_fixmes(source, style)
        .into_iter()
        .map(|fixme| fixme.issue)
        .collect()
}

/// Like [`extract_fixmes`], but keeps the line number of each anchor.
pub fn find_fixmes(source: &str, style: CommentStyle) -> Vec<Fixme> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let lines: Vec<&str> = source.lines().map(str::trim_end).collect();

    anchors(&lines, style)
        .into_iter()
        .map(|(idx, title)| {
            let body: String = lines[idx + 1..]
                .iter()
                .map_while(|line| body_line(line, style))
                .collect();
            Fixme {
                line: idx + 1,
                issue: IssueRecord::new(title, body),
            }
        })
        .collect()
}

/// Index and title of every anchor line.
fn anchors<'a>(lines: &[&'a str], style: CommentStyle) -> Vec<(usize, &'a str)> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| anchor_title(line, style).map(|title| (idx, title)))
        .collect()
}

fn anchor_title(line: &str, style: CommentStyle) -> Option<&str> {
    let text = style.strip_comment(line.trim_start())?;
    let title = text.trim_start().strip_prefix(FIXME_MARKER)?.trim_start();
    (!title.is_empty()).then_some(title)
}

/// Cleaned text of a body line, or `None` when the body ends here.
fn body_line(line: &str, style: CommentStyle) -> Option<&str> {
    if anchor_title(line, style).is_some() {
        return None;
    }
    style
        .strip_comment(line.trim_start())
        .map(|text| text.trim_start())
}
