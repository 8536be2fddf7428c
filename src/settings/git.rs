use std::path::Path;

use serde::Deserialize;

use crate::{
    git::{DEFAULT_BASE_CANDIDATES, DEFAULT_REMOTE},
    lib::errors::ConfigError,
};

/// Base branch detection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitSection {
    pub remote: String,
    pub base_candidates: Vec<String>,
    /// Explicit base reference; disables auto-detection when set.
    pub base_branch: Option<String>,
}

impl Default for GitSection {
    fn default() -> Self {
        Self {
            remote: DEFAULT_REMOTE.to_string(),
            base_candidates: DEFAULT_BASE_CANDIDATES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            base_branch: None,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawGitSection {
    pub remote: Option<String>,
    pub base_candidates: Option<Vec<String>>,
    pub base_branch: Option<String>,
}

pub fn parse_git_section(raw: Option<RawGitSection>, path: &Path) -> Result<GitSection, ConfigError> {
    let git_raw = raw.unwrap_or_default();
    let defaults = GitSection::default();

    let remote = git_raw.remote.unwrap_or(defaults.remote);
    validate_ref_name(path, "git.remote", &remote)?;

    let base_candidates = git_raw.base_candidates.unwrap_or(defaults.base_candidates);
    if base_candidates.is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "git.base_candidates",
            message: "List at least one branch name (e.g. [\"main\"])".into(),
        });
    }
    for candidate in &base_candidates {
        validate_ref_name(path, "git.base_candidates", candidate)?;
    }

    let base_branch = match git_raw.base_branch {
        Some(value) if value.trim().is_empty() => None,
        Some(value) => {
            validate_ref_name(path, "git.base_branch", &value)?;
            Some(value)
        }
        None => None,
    };

    Ok(GitSection {
        remote,
        base_candidates,
        base_branch,
    })
}

fn validate_ref_name(path: &Path, field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field,
            message: "Value must not be empty".into(),
        });
    }
    if value.chars().any(char::is_whitespace) || value.starts_with('-') {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field,
            message: format!("`{value}` is not a valid git reference name"),
        });
    }
    Ok(())
}
