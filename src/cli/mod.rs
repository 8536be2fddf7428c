//! CLI entrypoint module structure.
use anyhow::Result;
use serde_json::json;

use crate::rules::RuleTable;

pub mod args;
pub mod profile;

pub use args::{CliCommand, EvaluateArgs, ParsedCommand, RunArgs};
pub use profile::{
    resolve_base_branch, resolve_ci_base_ref, resolve_repo_dir, BaseSource, RunProfile,
};

/// Execute CLI command mode and return a user-facing JSON payload.
pub fn execute_cli_command(command: CliCommand, rules: &RuleTable) -> Result<String> {
    match command {
        CliCommand::Rules => Ok(serde_json::to_string_pretty(rules)?),
        CliCommand::Evaluate(args) => evaluate_paths(&args.paths, rules),
    }
}

/// Run the requirement engine over explicit paths.
fn evaluate_paths(paths: &[String], rules: &RuleTable) -> Result<String> {
    let requirement = rules.requires_docs_update(paths);
    let payload = json!({
        "paths": paths,
        "requirement": requirement,
        "docs_changed": rules.has_docs_changes(paths),
        "suggestions": rules.suggest_docs_to_update(paths),
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}
