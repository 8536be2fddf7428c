use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{bail, Context, Result};
use tempfile::TempDir;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_docgate");

/// Scratch git repository with a `main` branch holding one commit.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    pub fn init() -> Result<Self> {
        Self::init_on("main")
    }

    pub fn init_on(branch: &str) -> Result<Self> {
        let dir = tempfile::tempdir().context("failed to create temp dir")?;
        let repo = Self { dir };
        repo.git(&["init", "--quiet"])?;
        repo.git(&["symbolic-ref", "HEAD", &format!("refs/heads/{branch}")])?;
        repo.write("README.md", "# demo\n")?;
        repo.write("src/core/engine.ts", "export const engine = 1;\n")?;
        repo.write("docs/architecture/overview.md", "# Overview\n")?;
        repo.commit_all("initial")?;
        Ok(repo)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn git(&self, args: &[&str]) -> Result<Output> {
        let output = Command::new("git")
            .args(["-c", "commit.gpgsign=false", "-c", "core.autocrlf=false"])
            .args(args)
            .current_dir(self.path())
            .env("GIT_AUTHOR_NAME", "docgate")
            .env("GIT_AUTHOR_EMAIL", "docgate@example.com")
            .env("GIT_COMMITTER_NAME", "docgate")
            .env("GIT_COMMITTER_EMAIL", "docgate@example.com")
            .output()
            .with_context(|| format!("failed to spawn git {}", args.join(" ")))?;
        if !output.status.success() {
            bail!(
                "git {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        Ok(output)
    }

    pub fn write(&self, relative: &str, contents: &str) -> Result<()> {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents).with_context(|| format!("failed to write {relative}"))
    }

    pub fn commit_all(&self, message: &str) -> Result<()> {
        self.git(&["add", "--all"])?;
        self.git(&["commit", "--quiet", "--allow-empty", "-m", message])?;
        Ok(())
    }

    pub fn branch(&self, name: &str) -> Result<()> {
        self.git(&["checkout", "--quiet", "-b", name])?;
        Ok(())
    }
}

/// `docgate` command with a scrubbed environment pointing at `repo_dir`.
pub fn docgate(repo_dir: &Path) -> Command {
    let mut command = Command::new(BINARY_PATH);
    command
        .current_dir(repo_dir)
        .env_remove("GITHUB_BASE_REF")
        .env_remove("DOCGATE_BASE_BRANCH")
        .env_remove("DOCGATE_CONFIG_PATH")
        .env_remove("RUST_LOG")
        .args(["--color", "never"]);
    command
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub fn fixture(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}
