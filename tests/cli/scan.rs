use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_scan_lists_fixmes() -> Result<()> {
    let test = CliTest::new()?;
    test.track_file(
        "src/app.py",
        r#"# FIXME: fix the parser
# it crashes on empty input
def parse(text):
    return text.split()
"#,
    )?;
    test.track_file(
        "src/lib.rs",
        r#"
pub fn add(a: u32, b: u32) -> u32 {
    // FIXME: overflow
    a + b
}
"#,
    )?;

    let output = run(test.scan_command())?;

    assert_eq!(output.code, Some(0));
    assert_snapshot!(output.stdout, @r"
    src/app.py:1: fix the parser
        it crashes on empty input
    src/lib.rs:3: overflow

    Found 2 FIXMEs in 2 files
    ");

    Ok(())
}

#[test]
fn test_scan_ignores_untracked_and_unsupported_files() -> Result<()> {
    let test = CliTest::new()?;
    test.track_file("tracked.py", "# FIXME: tracked\n")?;
    test.write_file("untracked.py", "# FIXME: untracked\n")?;
    test.track_file("README.md", "# FIXME: markdown heading\n")?;

    let output = run(test.scan_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("tracked.py:1: tracked"));
    assert!(!output.stdout.contains("untracked"));
    assert!(!output.stdout.contains("markdown"));

    Ok(())
}

#[test]
fn test_scan_without_fixmes() -> Result<()> {
    let test = CliTest::new()?;
    test.track_file("clean.py", "x = 1\n")?;

    let output = run(test.scan_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "✓ Scanned 1 file - no FIXMEs found\n");

    Ok(())
}

#[test]
fn test_scan_skips_deleted_tracked_file() -> Result<()> {
    let test = CliTest::new()?;
    test.track_file("gone.py", "# FIXME: deleted\n")?;
    test.track_file("kept.py", "# FIXME: kept\n")?;
    std::fs::remove_file(test.root().join("gone.py"))?;

    let output = run(test.scan_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("kept.py:1: kept"));
    assert!(output.stdout.contains("1 file(s) could not be read"));

    Ok(())
}

#[test]
fn test_scan_respects_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_config(r#"{ "ignores": ["vendor/**"] }"#)?;
    test.track_file("vendor/dep.py", "# FIXME: not ours\n")?;
    test.track_file("app.py", "# FIXME: ours\n")?;

    let output = run(test.scan_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("app.py:1: ours"));
    assert!(!output.stdout.contains("not ours"));

    Ok(())
}

#[test]
fn test_scan_outside_repository() -> Result<()> {
    let test = CliTest::new()?;
    let outside = tempfile::TempDir::new()?;

    let mut cmd = test.scan_command();
    cmd.arg("--path").arg(outside.path());
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Error: Failed to open"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = run({
        let mut cmd = test.command();
        cmd.arg("--help");
        cmd
    })?;

    assert_eq!(output.code, Some(0));
    for command in ["report", "scan", "cache", "init"] {
        assert!(output.stdout.contains(command), "missing {command} in help");
    }

    Ok(())
}
