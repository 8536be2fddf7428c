use std::error::Error as StdError;

use serde::Serialize;

use crate::{git::Diff, rules::RequirementResult};

/// Skip reason when the base and `HEAD` do not differ.
pub const NO_CHANGES_REASON: &str = "No changes detected";
/// Skip reason when no changed path falls under a gate.
pub const NOT_REQUIRED_REASON: &str = "Documentation update not required for these changes";

/// Outcome of a validation run. Exactly one variant holds per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationVerdict {
    Skipped(SkippedRun),
    Passed(CheckedRun),
    Warning(CheckedRun),
    Error(FailedRun),
}

/// Discriminant of [`ValidationVerdict`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictStatus {
    Skipped,
    Passed,
    Warning,
    Error,
}

impl VerdictStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            VerdictStatus::Skipped => "skipped",
            VerdictStatus::Passed => "passed",
            VerdictStatus::Warning => "warning",
            VerdictStatus::Error => "error",
        }
    }
}

/// Validation could not or need not run to completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRun {
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<Diff>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirement: Option<RequirementResult>,
}

impl SkippedRun {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            base_branch: None,
            diff: None,
            requirement: None,
        }
    }

    pub fn with_base_branch(mut self, base_branch: impl Into<String>) -> Self {
        self.base_branch = Some(base_branch.into());
        self
    }

    pub fn with_diff(mut self, diff: Diff) -> Self {
        self.diff = Some(diff);
        self
    }

    pub fn with_requirement(mut self, requirement: RequirementResult) -> Self {
        self.requirement = Some(requirement);
        self
    }
}

/// A documentation requirement was triggered and checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckedRun {
    pub base_branch: String,
    pub diff: Diff,
    pub requirement: RequirementResult,
}

/// Validation failed unexpectedly; `cause` holds the full error chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedRun {
    pub cause: String,
}

impl FailedRun {
    pub fn new(cause: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
        }
    }

    /// Render `error` and its sources as `outer: inner: ...`.
    pub fn from_error(error: &(dyn StdError + 'static)) -> Self {
        let mut cause = error.to_string();
        let mut source = error.source();
        while let Some(inner) = source {
            let message = inner.to_string();
            if !cause.contains(&message) {
                cause.push_str(": ");
                cause.push_str(&message);
            }
            source = inner.source();
        }
        Self { cause }
    }
}

impl ValidationVerdict {
    pub fn status(&self) -> VerdictStatus {
        match self {
            ValidationVerdict::Skipped(_) => VerdictStatus::Skipped,
            ValidationVerdict::Passed(_) => VerdictStatus::Passed,
            ValidationVerdict::Warning(_) => VerdictStatus::Warning,
            ValidationVerdict::Error(_) => VerdictStatus::Error,
        }
    }

    /// Process exit status: only unexpected failures are non-zero.
    pub fn exit_status(&self) -> u8 {
        match self {
            ValidationVerdict::Error(_) => 1,
            ValidationVerdict::Skipped(_)
            | ValidationVerdict::Passed(_)
            | ValidationVerdict::Warning(_) => 0,
        }
    }

    pub fn base_branch(&self) -> Option<&str> {
        match self {
            ValidationVerdict::Skipped(run) => run.base_branch.as_deref(),
            ValidationVerdict::Passed(run) | ValidationVerdict::Warning(run) => {
                Some(run.base_branch.as_str())
            }
            ValidationVerdict::Error(_) => None,
        }
    }
}
