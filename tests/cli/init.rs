use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "✓ Created .fixitrc.json\n");

    let content = test.read_file(".fixitrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["cacheLocation"], ".fixit-cache.json");
    assert_eq!(parsed["defaultRemote"], "origin");
    assert!(content.contains("\n  \""), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_config_is_used_by_report() -> Result<()> {
    let test = CliTest::new()?;
    let mut cmd = test.command();
    cmd.arg("init");
    run(cmd)?;

    // The generated config points at a cache that `cache list` can read.
    let mut cmd = test.command();
    cmd.args(["cache", "list"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains(".fixit-cache.json is empty"));

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_config("{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains(".fixitrc.json already exists"));
    assert_eq!(test.read_file(".fixitrc.json")?, "{}");

    Ok(())
}
