use crate::repo;
use anyhow::{bail, Result};
use std::process::{Command, Stdio};

/// Run docgate against this repository's own history.
pub fn run(base: Option<String>, json: bool) -> Result<()> {
    let root = repo::repo_root()?;
    let mut command = Command::new("cargo");
    command
        .args(["run", "--quiet", "--bin", "docgate", "--"])
        .arg("--repo")
        .arg(&root)
        .current_dir(&root)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    if let Some(base) = base {
        command.args(["--base", &base]);
    }
    if json {
        command.args(["--format", "json"]);
    }

    eprintln!("==> docgate --repo {}", root.display());
    let status = command.status()?;
    if !status.success() {
        bail!("docgate reported an error (status {status})");
    }
    Ok(())
}
