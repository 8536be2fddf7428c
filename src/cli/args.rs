//! CLI argument definitions and `RunProfile` construction.
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};

use super::{resolve_base_branch, resolve_ci_base_ref, resolve_repo_dir, RunProfile};
use crate::{report::ReportFormat, settings::ColorChoice};

/// Parsed command intent from CLI.
#[derive(Debug, Clone)]
pub enum ParsedCommand {
    Validate(RunProfile),
    Cli(CliCommand),
}

/// Optional utility commands; without one, docgate validates the current change set.
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Print the built-in rule table as JSON.
    #[command(about = "Print the built-in rule table as JSON")]
    Rules,
    /// Evaluate explicit paths against the rule table without consulting git.
    #[command(
        about = "Evaluate explicit paths against the rule table without consulting git",
        after_help = "Hint: paths are repository-relative, e.g. `docgate evaluate src/cli/main.ts docs/user-guide/cli-usage.md`."
    )]
    Evaluate(EvaluateArgs),
}

/// Arguments for `evaluate`.
#[derive(Debug, Clone, Args)]
pub struct EvaluateArgs {
    /// Repository-relative paths to treat as changed.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Check that changes to user-facing code ship with documentation updates",
    long_about = None
)]
pub struct RunArgs {
    /// Base reference to compare HEAD against (overrides DOCGATE_BASE_BRANCH).
    #[arg(long = "base", value_name = "REF")]
    pub base_override: Option<String>,
    /// Repository directory (defaults to the current directory).
    #[arg(long = "repo", value_name = "DIR")]
    pub repo_override: Option<PathBuf>,
    /// Path to docgate.toml (overrides DOCGATE_CONFIG_PATH).
    #[arg(long = "config", value_name = "PATH")]
    pub config_override: Option<PathBuf>,
    /// Report format.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
    /// Colorize the text report (overrides report.color).
    #[arg(long, value_enum)]
    pub color: Option<ColorChoice>,
    /// Optional utility command.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl RunArgs {
    /// Build a `RunProfile` from CLI args and environment variables.
    pub fn build(self) -> Result<RunProfile> {
        let repo_dir = resolve_repo_dir(self.repo_override)?;
        let (base_branch, base_source) = resolve_base_branch(self.base_override);

        Ok(RunProfile {
            repo_dir,
            base_branch,
            base_source,
            config_override: self.config_override,
            format: self.format,
            color_override: self.color,
            ci_base_ref: resolve_ci_base_ref(),
        })
    }

    /// Parse CLI args into either validation mode or utility command mode.
    pub fn into_command(self) -> Result<ParsedCommand> {
        match self.command {
            Some(command) => {
                validate_command(&command)?;
                Ok(ParsedCommand::Cli(command))
            }
            None => Ok(ParsedCommand::Validate(self.build()?)),
        }
    }
}

fn validate_command(command: &CliCommand) -> Result<()> {
    match command {
        CliCommand::Rules => {}
        CliCommand::Evaluate(args) => {
            if let Some(path) = args
                .paths
                .iter()
                .find(|path| path.trim().is_empty() || Path::new(path).is_absolute())
            {
                return Err(anyhow!(
                    "invalid path `{path}`: expected a non-empty repository-relative path"
                ));
            }
        }
    }

    Ok(())
}
