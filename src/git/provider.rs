use std::{
    path::{Path, PathBuf},
    process::{Command, Output},
};

use tracing::{debug, info};

use crate::lib::errors::{BaseBranchError, DiffError};

use super::{parse_name_status, Diff, DiffProvider};

/// Remote consulted for base branch detection unless configured otherwise.
pub const DEFAULT_REMOTE: &str = "origin";
/// Branch names tried, in order, when the remote has no default `HEAD`.
pub const DEFAULT_BASE_CANDIDATES: &[&str] = &["main", "master"];

/// Knobs for the system `git` provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitProviderOptions {
    pub remote: String,
    pub base_candidates: Vec<String>,
    /// Value of `GITHUB_BASE_REF` captured at startup (pull request builds).
    pub ci_base_ref: Option<String>,
}

impl Default for GitProviderOptions {
    fn default() -> Self {
        Self {
            remote: DEFAULT_REMOTE.to_string(),
            base_candidates: DEFAULT_BASE_CANDIDATES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            ci_base_ref: None,
        }
    }
}

/// Provider that operates against a real repository via the `git` binary.
#[derive(Debug, Clone)]
pub struct GitDiffProvider {
    repo_dir: PathBuf,
    options: GitProviderOptions,
}

impl GitDiffProvider {
    pub fn new(repo_dir: impl Into<PathBuf>, options: GitProviderOptions) -> Self {
        Self {
            repo_dir: repo_dir.into(),
            options,
        }
    }

    pub fn repo_dir(&self) -> &Path {
        &self.repo_dir
    }

    pub fn options(&self) -> &GitProviderOptions {
        &self.options
    }

    fn git(&self, args: &[&str]) -> std::io::Result<Output> {
        Command::new("git")
            .args(args)
            .current_dir(&self.repo_dir)
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
    }

    fn ref_exists(&self, reference: &str) -> Result<bool, BaseBranchError> {
        let rev = format!("{reference}^{{commit}}");
        let output = self
            .git(&["rev-parse", "--verify", "--quiet", &rev])
            .map_err(|source| BaseBranchError::Spawn { source })?;
        Ok(output.status.success())
    }

    fn ensure_work_tree(&self) -> Result<(), BaseBranchError> {
        let output = self
            .git(&["rev-parse", "--is-inside-work-tree"])
            .map_err(|source| BaseBranchError::Spawn { source })?;
        if output.status.success() && String::from_utf8_lossy(&output.stdout).trim() == "true" {
            return Ok(());
        }
        Err(BaseBranchError::NotARepository {
            path: self.repo_dir.clone(),
        })
    }

    fn remote_default_head(&self) -> Result<Option<String>, BaseBranchError> {
        let symbolic = format!("refs/remotes/{}/HEAD", self.options.remote);
        let output = self
            .git(&["symbolic-ref", "--quiet", "--short", &symbolic])
            .map_err(|source| BaseBranchError::Spawn { source })?;
        if !output.status.success() {
            return Ok(None);
        }
        let head = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok(Some(head).filter(|value| !value.is_empty()))
    }

    fn resolve_ci_base_ref(&self, base_ref: &str) -> Result<String, BaseBranchError> {
        let remote_ref = format!("{}/{base_ref}", self.options.remote);
        for candidate in [remote_ref.as_str(), base_ref] {
            if self.ref_exists(candidate)? {
                return Ok(candidate.to_string());
            }
        }
        Err(BaseBranchError::CiBaseRefMissing {
            base_ref: base_ref.to_string(),
            remote: self.options.remote.clone(),
        })
    }
}

impl DiffProvider for GitDiffProvider {
    fn detect_base_branch(&self) -> Result<String, BaseBranchError> {
        self.ensure_work_tree()?;

        if let Some(base_ref) = self
            .options
            .ci_base_ref
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
        {
            let resolved = self.resolve_ci_base_ref(base_ref)?;
            info!(
                target: "docgate::git",
                base_branch = %resolved,
                source = "GITHUB_BASE_REF",
                "Detected base branch"
            );
            return Ok(resolved);
        }

        if let Some(head) = self.remote_default_head()? {
            info!(
                target: "docgate::git",
                base_branch = %head,
                source = "remote_head",
                "Detected base branch"
            );
            return Ok(head);
        }

        let mut tried = Vec::new();
        for name in &self.options.base_candidates {
            let remote_ref = format!("{}/{name}", self.options.remote);
            for candidate in [remote_ref, name.clone()] {
                if self.ref_exists(&candidate)? {
                    info!(
                        target: "docgate::git",
                        base_branch = %candidate,
                        source = "candidates",
                        "Detected base branch"
                    );
                    return Ok(candidate);
                }
                debug!(target: "docgate::git", reference = %candidate, "Base candidate not found");
                tried.push(candidate);
            }
        }

        Err(BaseBranchError::NotFound { tried })
    }

    fn changed_files(&self, base_branch: &str) -> Result<Diff, DiffError> {
        if !is_valid_base(base_branch) {
            return Err(DiffError::InvalidBase {
                base: base_branch.to_string(),
            });
        }

        let range = format!("{base_branch}...HEAD");
        let args = ["diff", "--name-status", "-z", range.as_str()];
        let rendered_args = args.join(" ");

        let output = self.git(&args).map_err(|source| DiffError::Spawn {
            args: rendered_args.clone(),
            source,
        })?;
        if !output.status.success() {
            return Err(DiffError::CommandFailed {
                args: rendered_args,
                exit_code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let diff = Diff::from_files(parse_name_status(&output.stdout)?);
        debug!(
            target: "docgate::git",
            range = %range,
            files = diff.files.len(),
            added = diff.stats.added,
            modified = diff.stats.modified,
            deleted = diff.stats.deleted,
            renamed = diff.stats.renamed,
            "Collected changed files"
        );
        Ok(diff)
    }
}

/// Base references are passed to git as positional arguments, so anything
/// git could read as an option is refused.
fn is_valid_base(base_branch: &str) -> bool {
    !base_branch.is_empty()
        && !base_branch.starts_with('-')
        && !base_branch.chars().any(char::is_whitespace)
}
