use anyhow::Result;
use serde_json::Value;

use super::common::{docgate, stderr_of, stdout_of, TestRepo};

fn feature_repo(changes: &[(&str, &str)]) -> Result<TestRepo> {
    let repo = TestRepo::init()?;
    repo.branch("feature")?;
    for (path, contents) in changes {
        repo.write(path, contents)?;
    }
    repo.commit_all("feature work")?;
    Ok(repo)
}

#[test]
fn gated_change_without_docs_warns_and_exits_zero() -> Result<()> {
    let repo = feature_repo(&[("src/core/engine.ts", "export const engine = 2;\n")])?;
    let output = docgate(repo.path()).output()?;
    let stdout = stdout_of(&output);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout.contains("Base branch detected: main"), "{stdout}");
    assert!(stdout.contains("Comparing: main...HEAD"), "{stdout}");
    assert!(stdout.contains("  ~ src/core/engine.ts"), "{stdout}");
    assert!(
        stdout.contains("⚠️  Documentation update recommended but not found"),
        "{stdout}"
    );
    assert!(stdout.contains("Changes detected in: src/core/"), "{stdout}");
    assert!(
        stdout.contains("  - Update docs/architecture/overview.md"),
        "{stdout}"
    );
    Ok(())
}

#[test]
fn gated_change_with_docs_passes() -> Result<()> {
    let repo = feature_repo(&[
        ("src/cli/main.ts", "export {};\n"),
        ("docs/user-guide/cli-usage.md", "# CLI\n"),
    ])?;
    let output = docgate(repo.path()).output()?;
    let stdout = stdout_of(&output);

    assert!(output.status.success());
    assert!(stdout.contains("✅ Documentation validation passed"), "{stdout}");
    assert!(stdout.contains("  + docs/user-guide/cli-usage.md"), "{stdout}");
    assert!(stdout.contains("All checks passed!"), "{stdout}");
    Ok(())
}

#[test]
fn non_gated_change_is_skipped() -> Result<()> {
    let repo = feature_repo(&[("README.md", "# demo v2\n")])?;
    let output = docgate(repo.path()).output()?;
    let stdout = stdout_of(&output);

    assert!(output.status.success());
    assert!(
        stdout.contains("Documentation update not required for these changes"),
        "{stdout}"
    );
    assert!(stdout.contains("Validation skipped."), "{stdout}");
    Ok(())
}

#[test]
fn empty_branch_reports_no_changes() -> Result<()> {
    let repo = TestRepo::init()?;
    repo.branch("feature")?;
    let output = docgate(repo.path()).output()?;
    let stdout = stdout_of(&output);

    assert!(output.status.success());
    assert!(stdout.contains("No changes detected"), "{stdout}");
    Ok(())
}

#[test]
fn undetectable_base_branch_is_skipped() -> Result<()> {
    let repo = TestRepo::init_on("trunk")?;
    let output = docgate(repo.path()).output()?;
    let stdout = stdout_of(&output);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout.contains("Could not detect base branch"), "{stdout}");
    assert!(stdout.contains("Validation skipped."), "{stdout}");
    assert!(!stdout.contains("Comparing:"), "{stdout}");
    Ok(())
}

#[test]
fn directory_outside_git_is_skipped() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output = docgate(dir.path()).output()?;

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("Validation skipped."));
    Ok(())
}

#[test]
fn unknown_base_reference_is_an_error() -> Result<()> {
    let repo = feature_repo(&[("bin/run", "#!/bin/sh\n")])?;
    let output = docgate(repo.path())
        .args(["--base", "does-not-exist"])
        .output()?;
    let stderr = stderr_of(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("❌ Error:"), "{stderr}");
    assert!(stderr.contains("does-not-exist"), "{stderr}");
    assert!(
        stdout_of(&output).starts_with("🔍 Validating documentation updates..."),
        "header stays on stdout"
    );
    assert!(!stderr.contains("🔍"), "{stderr}");
    Ok(())
}

#[test]
fn option_like_base_reference_is_an_error() -> Result<()> {
    let repo = feature_repo(&[("src/core/x.ts", "export {};\n")])?;
    let target = repo.path().join("leak");
    let output = docgate(repo.path())
        .env("DOCGATE_BASE_BRANCH", format!("--output={}", target.display()))
        .output()?;
    let stdout = stdout_of(&output);
    let stderr = stderr_of(&output);

    assert_eq!(output.status.code(), Some(1), "stdout: {stdout}");
    assert!(stderr.contains("❌ Error:"), "{stderr}");
    assert!(stderr.contains("not a valid base reference"), "{stderr}");
    assert!(!stdout.contains("Validation skipped."), "{stdout}");
    assert!(!repo.path().join("leak...HEAD").exists());
    Ok(())
}

#[test]
fn base_branch_from_environment_is_used() -> Result<()> {
    let repo = TestRepo::init()?;
    repo.branch("release")?;
    repo.write("bin/run", "#!/bin/sh\n")?;
    repo.commit_all("release tooling")?;
    repo.branch("feature")?;
    repo.write("README.md", "# readme\n")?;
    repo.commit_all("readme only")?;

    let output = docgate(repo.path())
        .env("DOCGATE_BASE_BRANCH", "release")
        .output()?;
    let stdout = stdout_of(&output);

    assert!(stdout.contains("Comparing: release...HEAD"), "{stdout}");
    assert!(
        stdout.contains("Documentation update not required for these changes"),
        "{stdout}"
    );
    Ok(())
}

#[test]
fn missing_ci_base_ref_is_skipped() -> Result<()> {
    let repo = feature_repo(&[("bin/run", "#!/bin/sh\n")])?;
    let output = docgate(repo.path())
        .env("GITHUB_BASE_REF", "release-42")
        .output()?;
    let stdout = stdout_of(&output);

    assert!(output.status.success());
    assert!(stdout.contains("release-42"), "{stdout}");
    assert!(stdout.contains("Validation skipped."), "{stdout}");
    Ok(())
}

#[test]
fn ci_base_ref_resolves_local_branch() -> Result<()> {
    let repo = feature_repo(&[("bin/run", "#!/bin/sh\n")])?;
    let output = docgate(repo.path())
        .env("GITHUB_BASE_REF", "main")
        .output()?;
    let stdout = stdout_of(&output);

    assert!(stdout.contains("Comparing: main...HEAD"), "{stdout}");
    assert!(
        stdout.contains("  - Update docs/user-guide/installation.md"),
        "{stdout}"
    );
    Ok(())
}

#[test]
fn json_report_is_tagged_by_status() -> Result<()> {
    let repo = feature_repo(&[("src/index.ts", "export {};\n")])?;
    let output = docgate(repo.path()).args(["--format", "json"]).output()?;
    let value: Value = serde_json::from_slice(&output.stdout)?;

    assert_eq!(value["status"], "warning");
    assert_eq!(value["base_branch"], "main");
    assert_eq!(value["diff"]["stats"]["added"], 1);
    assert_eq!(value["requirement"]["affected_paths"][0], "src/index.ts");
    assert_eq!(value["requirement"]["suggestions"][0], "docs/user-guide/");
    Ok(())
}

#[test]
fn renamed_file_is_reported_under_new_path() -> Result<()> {
    let repo = TestRepo::init()?;
    repo.branch("feature")?;
    repo.git(&["mv", "src/core/engine.ts", "src/core/runner.ts"])?;
    repo.commit_all("rename engine")?;

    let output = docgate(repo.path()).args(["--format", "json"]).output()?;
    let value: Value = serde_json::from_slice(&output.stdout)?;

    assert_eq!(value["status"], "warning");
    assert_eq!(value["diff"]["files"][0]["path"], "src/core/runner.ts");
    assert_eq!(value["diff"]["files"][0]["status"], "renamed");
    Ok(())
}
