use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading or validating the settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the settings file.
    #[error("Failed to read settings file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Required field is missing.
    #[error("Settings file {path} is missing `{field}`")]
    MissingField { path: PathBuf, field: &'static str },
    /// Field failed validation.
    #[error("Settings file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Reasons the base reference could not be inferred.
///
/// These are expected in CI contexts such as shallow clones or detached
/// checkouts without an upstream, so the validator turns them into a skip.
#[derive(Debug, Error)]
pub enum BaseBranchError {
    #[error("Not inside a git work tree ({path}); cannot detect base branch")]
    NotARepository { path: PathBuf },
    #[error(
        "GITHUB_BASE_REF is `{base_ref}` but neither `{remote}/{base_ref}` nor `{base_ref}` exists locally (fetch the base branch or increase the clone depth)"
    )]
    CiBaseRefMissing { base_ref: String, remote: String },
    #[error("Could not detect base branch (tried: {}); pass --base or set DOCGATE_BASE_BRANCH", .tried.join(", "))]
    NotFound { tried: Vec<String> },
    #[error("Failed to run git while detecting base branch: {source}")]
    Spawn {
        #[source]
        source: io::Error,
    },
}

/// Failures while computing the changed file set.
#[derive(Debug, Error)]
pub enum DiffError {
    #[error("`{base}` is not a valid base reference; it must be non-empty and must not start with `-`")]
    InvalidBase { base: String },
    #[error("Failed to run `git {args}`: {source}")]
    Spawn {
        args: String,
        #[source]
        source: io::Error,
    },
    #[error("`git {args}` exited abnormally (exit={exit_code:?}): {stderr}")]
    CommandFailed {
        args: String,
        exit_code: Option<i32>,
        stderr: String,
    },
    #[error("Unrecognized change status `{status}` for {path}")]
    UnknownStatus { status: String, path: String },
    #[error("Truncated `git diff --name-status` output after status `{status}`")]
    Truncated { status: String },
    #[error("`git diff` reported a path that is not valid UTF-8: {lossy}")]
    NonUtf8Path { lossy: String },
}
