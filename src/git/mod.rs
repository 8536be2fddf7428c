//! Changed-file discovery against a base reference.
//!
//! `DiffProvider` is the seam between validation and the repository; the
//! system implementation shells out to `git`, tests substitute fixed diffs.

mod parse;
mod provider;

use serde::Serialize;

use crate::lib::errors::{BaseBranchError, DiffError};

pub use parse::parse_name_status;
pub use provider::{GitDiffProvider, GitProviderOptions, DEFAULT_BASE_CANDIDATES, DEFAULT_REMOTE};

/// How a file changed between the base reference and `HEAD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeStatus {
    Added,
    Modified,
    Deleted,
    Renamed,
}

impl ChangeStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ChangeStatus::Added => "added",
            ChangeStatus::Modified => "modified",
            ChangeStatus::Deleted => "deleted",
            ChangeStatus::Renamed => "renamed",
        }
    }
}

/// A single changed file, path relative to the repository root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileChange {
    pub path: String,
    pub status: ChangeStatus,
}

impl FileChange {
    pub fn new(path: impl Into<String>, status: ChangeStatus) -> Self {
        Self {
            path: path.into(),
            status,
        }
    }
}

/// Per-status counts for a diff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    pub added: usize,
    pub modified: usize,
    pub deleted: usize,
    pub renamed: usize,
}

/// Changed files between a base reference and `HEAD`, in the order git reported them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diff {
    pub files: Vec<FileChange>,
    pub stats: DiffStats,
}

impl Diff {
    pub fn from_files(files: Vec<FileChange>) -> Self {
        let mut stats = DiffStats::default();
        for file in &files {
            match file.status {
                ChangeStatus::Added => stats.added += 1,
                ChangeStatus::Modified => stats.modified += 1,
                ChangeStatus::Deleted => stats.deleted += 1,
                ChangeStatus::Renamed => stats.renamed += 1,
            }
        }
        Self { files, stats }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn paths(&self) -> Vec<&str> {
        self.files.iter().map(|file| file.path.as_str()).collect()
    }
}

/// Source of changed files and base reference detection.
pub trait DiffProvider {
    /// Infer the reference to compare `HEAD` against.
    fn detect_base_branch(&self) -> Result<String, BaseBranchError>;

    /// Files changed in `base_branch...HEAD`.
    fn changed_files(&self, base_branch: &str) -> Result<Diff, DiffError>;
}
