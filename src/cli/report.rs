//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow fixit to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CacheSummary, CommandResult, CommandSummary, InitSummary};
use crate::{
    reporter::Outcome,
    scan::{FileOutcome, FoundFixme, ScanResult},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Mark for issues that were filed by an earlier run.
pub const SKIP_MARK: &str = "-";

pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Report(scan) => print_outcomes(scan, writer),
        CommandSummary::Scan(scan) => print_fixmes(scan, writer),
        CommandSummary::CacheList(summary) => print_cache(summary, writer),
        CommandSummary::CacheClear(summary) => print_cache_cleared(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn print_outcomes<W: Write>(scan: &ScanResult<FileOutcome>, writer: &mut W) {
    if scan.items.is_empty() {
        print_nothing_found(scan.files_scanned, writer);
        return;
    }

    let mut submitted = 0;
    let mut skipped = 0;
    let mut failed = 0;

    for FileOutcome { fixme, outcome } in &scan.items {
        let mark = match outcome {
            Outcome::Submitted(_) => {
                submitted += 1;
                SUCCESS_MARK.green()
            }
            Outcome::Skipped => {
                skipped += 1;
                SKIP_MARK.dimmed()
            }
            Outcome::Failed(_) => {
                failed += 1;
                FAILURE_MARK.red()
            }
        };
        let status = match outcome {
            Outcome::Submitted(_) => outcome.to_string().green(),
            Outcome::Skipped => outcome.to_string().dimmed(),
            Outcome::Failed(_) => outcome.to_string().red(),
        };

        let _ = writeln!(
            writer,
            "{} {}:{} \"{}\"  {}",
            mark,
            fixme.path.display(),
            fixme.line,
            fixme.issue.title,
            status
        );
    }

    let summary = format!(
        "{} submitted, {} skipped, {} failed ({} {} scanned)",
        submitted,
        skipped,
        failed,
        scan.files_scanned,
        plural(scan.files_scanned, "file", "files")
    );
    let summary = if failed > 0 {
        summary.red()
    } else {
        summary.green()
    };
    let _ = writeln!(writer, "\n{}", summary);
    print_skipped_files(scan.files_skipped, writer);
}

fn print_fixmes<W: Write>(scan: &ScanResult<FoundFixme>, writer: &mut W) {
    if scan.items.is_empty() {
        print_nothing_found(scan.files_scanned, writer);
        return;
    }

    for fixme in &scan.items {
        let _ = writeln!(
            writer,
            "{}:{}: {}",
            fixme.path.display().to_string().cyan(),
            fixme.line,
            fixme.issue.title.bold()
        );
        if fixme.issue.body != fixme.issue.title {
            let _ = writeln!(writer, "    {}", fixme.issue.body);
        }
    }

    let count = scan.items.len();
    let _ = writeln!(
        writer,
        "\nFound {} {} in {} {}",
        count,
        plural(count, "FIXME", "FIXMEs"),
        scan.files_scanned,
        plural(scan.files_scanned, "file", "files")
    );
    print_skipped_files(scan.files_skipped, writer);
}

fn print_nothing_found<W: Write>(files_scanned: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Scanned {} {} - no FIXMEs found",
            files_scanned,
            plural(files_scanned, "file", "files")
        )
        .green()
    );
}

fn print_skipped_files<W: Write>(count: usize, writer: &mut W) {
    if count > 0 {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

fn print_cache<W: Write>(summary: &CacheSummary, writer: &mut W) {
    let Some(path) = &summary.path else {
        print_cache_disabled(writer);
        return;
    };

    if summary.entries.is_empty() {
        let _ = writeln!(writer, "Cache {} is empty", path.display());
        return;
    }

    for (repo, issues) in &summary.entries {
        let _ = writeln!(
            writer,
            "{} ({} {})",
            repo.bold(),
            issues.len(),
            plural(issues.len(), "issue", "issues")
        );
        for issue in issues {
            let _ = writeln!(writer, "  {} {}", SKIP_MARK.dimmed(), issue.title);
        }
    }
}

fn print_cache_cleared<W: Write>(summary: &CacheSummary, writer: &mut W) {
    let Some(path) = &summary.path else {
        print_cache_disabled(writer);
        return;
    };

    let count = summary.issue_count();
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Cleared {} cached {} from {}",
            count,
            plural(count, "issue", "issues"),
            path.display()
        )
        .green()
    );
}

fn print_cache_disabled<W: Write>(writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} no cacheLocation configured; filed issues are not remembered between runs",
        "warning:".bold().yellow()
    );
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    );
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
