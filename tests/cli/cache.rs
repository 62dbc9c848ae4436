use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const SEEDED: &str = r#"{
  "widgets": [
    { "title": "fix the parser", "body": "it crashes on empty input" },
    { "title": "slow query", "body": "slow query" }
  ]
}"#;

fn seeded() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_config(r#"{ "cacheLocation": "cache/issues.json" }"#)?;
    test.write_file("cache/issues.json", SEEDED)?;
    Ok(test)
}

#[test]
fn test_cache_list() -> Result<()> {
    let test = seeded()?;

    let mut cmd = test.command();
    cmd.args(["cache", "list"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "widgets (2 issues)\n  - fix the parser\n  - slow query\n"
    );

    Ok(())
}

#[test]
fn test_cache_clear() -> Result<()> {
    let test = seeded()?;

    let mut cmd = test.command();
    cmd.args(["cache", "clear"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Cleared 2 cached issues from"));
    assert_eq!(test.read_file("cache/issues.json")?, "{}");

    let mut cmd = test.command();
    cmd.args(["cache", "list"]);
    let output = run(cmd)?;
    assert!(output.stdout.starts_with("Cache "));
    assert!(output.stdout.ends_with("is empty\n"));

    Ok(())
}

#[test]
fn test_cache_list_corrupt_file_is_empty() -> Result<()> {
    let test = CliTest::new()?;
    test.write_config(r#"{ "cacheLocation": "issues.json" }"#)?;
    test.write_file("issues.json", "not json")?;

    let mut cmd = test.command();
    cmd.args(["cache", "list"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.ends_with("is empty\n"));

    Ok(())
}

#[test]
fn test_cache_without_location() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.args(["cache", "list"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.starts_with("warning: no cacheLocation configured"));

    Ok(())
}
