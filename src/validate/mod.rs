//! Documentation validation: combines the diff provider and the rule table
//! into a single verdict.
//!
//! Nothing here prints or exits; the reporter owns presentation.

mod verdict;

use tracing::{debug, info, warn};

use crate::{
    git::DiffProvider,
    lib::telemetry::ValidationSpan,
    rules::RuleTable,
};

pub use verdict::{
    CheckedRun, FailedRun, SkippedRun, ValidationVerdict, VerdictStatus, NO_CHANGES_REASON,
    NOT_REQUIRED_REASON,
};

/// Run one validation against `provider`, comparing `HEAD` with `base_branch`
/// (auto-detected when `None`).
pub fn validate_documentation(
    provider: &dyn DiffProvider,
    rules: &RuleTable,
    base_branch: Option<&str>,
) -> ValidationVerdict {
    let span = ValidationSpan::start(base_branch);
    let verdict = {
        let _entered = span.enter();
        evaluate(provider, rules, base_branch)
    };
    span.finish(verdict.status().as_str());
    verdict
}

fn evaluate(
    provider: &dyn DiffProvider,
    rules: &RuleTable,
    base_branch: Option<&str>,
) -> ValidationVerdict {
    let base_branch = match base_branch {
        Some(branch) => branch.to_string(),
        None => match provider.detect_base_branch() {
            Ok(branch) => branch,
            Err(err) => {
                info!(
                    target: "docgate::validate",
                    reason = %err,
                    "Skipping validation: base branch unavailable"
                );
                return ValidationVerdict::Skipped(SkippedRun::new(err.to_string()));
            }
        },
    };

    let diff = match provider.changed_files(&base_branch) {
        Ok(diff) => diff,
        Err(err) => {
            warn!(
                target: "docgate::validate",
                base_branch = %base_branch,
                reason = %err,
                "Failed to collect changed files"
            );
            return ValidationVerdict::Error(FailedRun::from_error(&err));
        }
    };

    if diff.is_empty() {
        return ValidationVerdict::Skipped(
            SkippedRun::new(NO_CHANGES_REASON)
                .with_base_branch(base_branch)
                .with_diff(diff),
        );
    }

    let changed_paths = diff.paths();
    let requirement = rules.requires_docs_update(&changed_paths);
    debug!(
        target: "docgate::validate",
        required = requirement.required,
        affected = ?requirement.affected_paths,
        "Evaluated documentation requirement"
    );

    if !requirement.required {
        return ValidationVerdict::Skipped(
            SkippedRun::new(NOT_REQUIRED_REASON)
                .with_base_branch(base_branch)
                .with_diff(diff)
                .with_requirement(requirement),
        );
    }

    let docs_updated = rules.has_docs_changes(&changed_paths);
    let run = CheckedRun {
        base_branch,
        diff,
        requirement,
    };
    if docs_updated {
        ValidationVerdict::Passed(run)
    } else {
        ValidationVerdict::Warning(run)
    }
}
