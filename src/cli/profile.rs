//! RunProfile and base branch / repository resolution.
use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use crate::{report::ReportFormat, settings::ColorChoice};

const BASE_BRANCH_ENV: &str = "DOCGATE_BASE_BRANCH";
const CI_BASE_REF_ENV: &str = "GITHUB_BASE_REF";

/// Where the explicit base branch came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseSource {
    Cli,
    Env,
    /// No explicit base; settings or auto-detection decide.
    Unset,
}

/// Resolved settings for one validation run.
#[derive(Debug, Clone)]
pub struct RunProfile {
    pub repo_dir: PathBuf,
    pub base_branch: Option<String>,
    pub base_source: BaseSource,
    pub config_override: Option<PathBuf>,
    pub format: ReportFormat,
    pub color_override: Option<ColorChoice>,
    pub ci_base_ref: Option<String>,
}

/// Resolve the repository directory: CLI override → current directory.
pub fn resolve_repo_dir(override_path: Option<PathBuf>) -> Result<PathBuf> {
    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(match override_path {
        Some(path) if path.is_absolute() => path,
        Some(path) => cwd.join(path),
        None => cwd,
    })
}

/// Resolve the base branch in the order: CLI override → env var.
pub fn resolve_base_branch(base_override: Option<String>) -> (Option<String>, BaseSource) {
    if let Some(base) = base_override.and_then(|v| normalize_ref(&v)) {
        return (Some(base), BaseSource::Cli);
    }

    if let Some(env_base) = env::var(BASE_BRANCH_ENV)
        .ok()
        .and_then(|v| normalize_ref(&v))
    {
        return (Some(env_base), BaseSource::Env);
    }

    (None, BaseSource::Unset)
}

/// Capture the pull request base reference exported by GitHub Actions.
pub fn resolve_ci_base_ref() -> Option<String> {
    env::var(CI_BASE_REF_ENV)
        .ok()
        .and_then(|v| normalize_ref(&v))
}

fn normalize_ref(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}
