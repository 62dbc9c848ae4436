use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, UNREACHABLE_API, run};

const FIXME: &str = "# FIXME: fix the parser\n# it crashes on empty input\nx = 1\n";

fn setup(test: &CliTest) -> Result<()> {
    test.write_config(&format!(
        r#"{{
            "cacheLocation": ".fixit-cache.json",
            "apiUrl": "{}",
            "timeoutSecs": 5
        }}"#,
        UNREACHABLE_API
    ))?;
    test.track_file("src/app.py", FIXME)
}

fn read_cache(test: &CliTest) -> Result<Value> {
    Ok(serde_json::from_str(&test.read_file(".fixit-cache.json")?)?)
}

#[test]
fn test_report_network_failure_is_not_cached() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    let mut cmd = test.report_command();
    cmd.env("FIXIT_TOKEN", "secret-token");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("✘ src/app.py:1 \"fix the parser\"  failed: network error"));
    assert!(output.stdout.contains("0 submitted, 0 skipped, 1 failed (1 file scanned)"));
    assert!(!output.stdout.contains("secret-token"));
    assert_eq!(read_cache(&test)?, json!({}));

    Ok(())
}

#[test]
fn test_report_skips_cached_issues() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;
    test.write_file(
        ".fixit-cache.json",
        r#"{"widgets": [{"title": "fix the parser", "body": "it crashes on empty input"}]}"#,
    )?;

    // Twice: a cached issue is never posted, so the unreachable API is never hit.
    for _ in 0..2 {
        let mut cmd = test.report_command();
        cmd.args(["--username", "jaidevd", "--password", "password"]);
        let output = run(cmd)?;

        assert_eq!(output.code, Some(0));
        assert_eq!(
            output.stdout,
            "- src/app.py:1 \"fix the parser\"  already cached\n\
             \n\
             0 submitted, 1 skipped, 0 failed (1 file scanned)\n"
        );
    }

    Ok(())
}

#[test]
fn test_report_credentials_from_netrc() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;
    test.write_file("sample.netrc", "machine github login jaidevd password password\n")?;

    let mut cmd = test.report_command();
    cmd.env("FIXIT_NETRC", test.root().join("sample.netrc"));
    let output = run(cmd)?;

    // Credentials were found, so the run got as far as the network.
    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("failed: network error"));

    Ok(())
}

#[test]
fn test_report_credentials_from_home_netrc() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;
    test.write_file(".netrc", "machine github login jaidevd password password\n")?;

    let output = run(test.report_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("failed: network error"));

    Ok(())
}

#[test]
fn test_report_without_credentials() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    let output = run(test.report_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Error: no credentials found"));
    assert!(output.stdout.is_empty());

    Ok(())
}

#[test]
fn test_report_username_requires_password() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    let mut cmd = test.report_command();
    cmd.args(["--username", "jaidevd"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("--username and --password must be given together"));

    Ok(())
}

#[test]
fn test_report_without_remote() -> Result<()> {
    let test = CliTest::without_remote()?;
    setup(&test)?;

    let mut cmd = test.report_command();
    cmd.env("FIXIT_TOKEN", "token");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("remote 'origin' not found"));
    assert!(output.stdout.is_empty());

    Ok(())
}

#[test]
fn test_report_uses_configured_remote() -> Result<()> {
    let test = CliTest::new()?;
    test.write_config(&format!(
        r#"{{ "defaultRemote": "upstream", "apiUrl": "{}" }}"#,
        UNREACHABLE_API
    ))?;
    test.track_file("app.py", FIXME)?;

    let mut cmd = test.report_command();
    cmd.env("FIXIT_TOKEN", "token");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("remote 'upstream' not found"));

    Ok(())
}

#[test]
fn test_report_unrecognized_remote_url() -> Result<()> {
    let test = CliTest::without_remote()?;
    setup(&test)?;
    let repo = git2::Repository::open(test.root())?;
    repo.remote("origin", "https://gitlab.com/acme/widgets.git")?;

    let mut cmd = test.report_command();
    cmd.env("FIXIT_TOKEN", "token");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("unrecognized remote URL"));

    Ok(())
}

#[test]
fn test_report_without_fixmes_needs_no_network() -> Result<()> {
    let test = CliTest::new()?;
    test.write_config(&format!(r#"{{ "apiUrl": "{}" }}"#, UNREACHABLE_API))?;
    test.track_file("clean.py", "x = 1\n")?;

    let mut cmd = test.report_command();
    cmd.env("GITHUB_TOKEN", "token");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "✓ Scanned 1 file - no FIXMEs found\n");

    Ok(())
}
