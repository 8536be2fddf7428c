use std::process::Command;

use anyhow::Result;
use serde_json::Value;

use super::common::{docgate, fixture, stdout_of, TestRepo, BINARY_PATH};

#[test]
fn help_lists_flags_and_subcommands() -> Result<()> {
    let output = Command::new(BINARY_PATH).arg("--help").output()?;
    let stdout = stdout_of(&output);

    assert!(output.status.success());
    for needle in ["--base", "--repo", "--config", "--format", "rules", "evaluate"] {
        assert!(stdout.contains(needle), "help should mention {needle}: {stdout}");
    }
    Ok(())
}

#[test]
fn rules_subcommand_prints_table() -> Result<()> {
    let output = Command::new(BINARY_PATH).arg("rules").output()?;
    let value: Value = serde_json::from_slice(&output.stdout)?;

    assert!(output.status.success());
    let gates: Vec<&str> = value["gates"]
        .as_array()
        .map(|gates| gates.iter().filter_map(|g| g["gate"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(gates, ["src/cli/", "src/index.ts", "bin/", "src/core/"]);
    Ok(())
}

#[test]
fn evaluate_subcommand_skips_git() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output = Command::new(BINARY_PATH)
        .current_dir(dir.path())
        .args(["evaluate", "bin/docgate", "src/cli/args.ts"])
        .output()?;
    let value: Value = serde_json::from_slice(&output.stdout)?;

    assert!(output.status.success());
    assert_eq!(value["requirement"]["required"], true);
    assert_eq!(
        value["requirement"]["reason"],
        "Changes detected in: src/cli/, bin/"
    );
    assert_eq!(value["docs_changed"], false);
    Ok(())
}

#[test]
fn repo_flag_targets_another_directory() -> Result<()> {
    let repo = TestRepo::init()?;
    repo.branch("feature")?;
    repo.write("bin/run", "#!/bin/sh\n")?;
    repo.commit_all("add bin")?;
    let elsewhere = tempfile::tempdir()?;

    let output = docgate(elsewhere.path())
        .arg("--repo")
        .arg(repo.path())
        .output()?;
    let stdout = stdout_of(&output);

    assert!(output.status.success());
    assert!(
        stdout.contains("Documentation update recommended but not found"),
        "{stdout}"
    );
    Ok(())
}

#[test]
fn settings_file_changes_guidelines_and_candidates() -> Result<()> {
    let repo = TestRepo::init_on("develop")?;
    repo.branch("feature")?;
    repo.write("src/cli/main.ts", "export {};\n")?;
    repo.commit_all("cli")?;

    let output = docgate(repo.path())
        .arg("--config")
        .arg(fixture("tests/fixtures/settings_valid.toml"))
        .output()?;
    let stdout = stdout_of(&output);

    assert!(stdout.contains("Comparing: develop...HEAD"), "{stdout}");
    assert!(
        stdout.contains("See docs/CONTRIBUTING.md for guidelines."),
        "{stdout}"
    );
    Ok(())
}

#[test]
fn invalid_settings_file_fails_startup() -> Result<()> {
    let repo = TestRepo::init()?;
    let output = docgate(repo.path())
        .arg("--config")
        .arg(fixture("tests/fixtures/settings_invalid_color.toml"))
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("report.color"));
    Ok(())
}
