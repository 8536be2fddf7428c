//! Wires CLI profile, settings, the git provider and the reporter into one run.
mod exit;

use std::process::ExitCode;

use tracing::debug;

use crate::{
    cli::{BaseSource, RunProfile},
    git::{DiffProvider, GitDiffProvider, GitProviderOptions},
    report::{self, Rendered, ReportOptions},
    rules::RuleTable,
    settings::Settings,
    validate::{validate_documentation, ValidationVerdict},
};

pub use exit::RuntimeExit;

/// Verdict plus its rendered report.
#[derive(Debug)]
pub struct RunOutcome {
    pub verdict: ValidationVerdict,
    pub rendered: Rendered,
}

impl RunOutcome {
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.verdict.exit_status())
    }

    pub fn emit(&self) {
        print!("{}", self.rendered.stdout);
        eprint!("{}", self.rendered.stderr);
    }
}

/// Load settings for `profile`: `--config` first, then env/default lookup.
pub fn load_settings(profile: &RunProfile) -> Result<Settings, RuntimeExit> {
    let loaded = match &profile.config_override {
        Some(path) => Settings::load_from_path(path.clone()),
        None => Settings::load_from_env_or_default(&profile.repo_dir),
    };
    loaded.map_err(RuntimeExit::from_error)
}

/// Build the git-backed provider from profile and settings.
pub fn build_provider(profile: &RunProfile, settings: &Settings) -> GitDiffProvider {
    GitDiffProvider::new(
        profile.repo_dir.clone(),
        GitProviderOptions {
            remote: settings.git.remote.clone(),
            base_candidates: settings.git.base_candidates.clone(),
            ci_base_ref: profile.ci_base_ref.clone(),
        },
    )
}

/// Explicit base in the order CLI → env → settings; `None` means auto-detect.
pub fn explicit_base_branch<'a>(profile: &'a RunProfile, settings: &'a Settings) -> Option<&'a str> {
    match profile.base_source {
        BaseSource::Cli | BaseSource::Env => profile.base_branch.as_deref(),
        BaseSource::Unset => settings.git.base_branch.as_deref(),
    }
}

/// Resolve presentation options from profile and settings.
pub fn report_options(profile: &RunProfile, settings: &Settings) -> ReportOptions {
    let color = profile.color_override.unwrap_or(settings.report.color);
    ReportOptions {
        format: profile.format,
        color: color.enabled(),
        guidelines: settings.report.guidelines.clone(),
    }
}

/// Validate and render without touching stdout.
pub fn execute(
    provider: &dyn DiffProvider,
    rules: &RuleTable,
    base_branch: Option<&str>,
    options: &ReportOptions,
) -> Result<RunOutcome, RuntimeExit> {
    let verdict = validate_documentation(provider, rules, base_branch);
    let rendered = report::render(&verdict, rules, options).map_err(RuntimeExit::from_error)?;
    Ok(RunOutcome { verdict, rendered })
}

/// Run a full validation for `profile` and print the report.
pub fn run_validation(profile: RunProfile, rules: &RuleTable) -> Result<ExitCode, RuntimeExit> {
    let settings = load_settings(&profile)?;
    let provider = build_provider(&profile, &settings);
    let base_branch = explicit_base_branch(&profile, &settings);
    let options = report_options(&profile, &settings);
    debug!(
        target: "docgate::runtime",
        repo = %provider.repo_dir().display(),
        base_branch = ?base_branch,
        base_source = ?profile.base_source,
        format = ?options.format,
        "Starting documentation gate"
    );

    let outcome = execute(&provider, rules, base_branch, &options)?;
    debug!(
        target: "docgate::runtime",
        status = outcome.verdict.status().as_str(),
        base_branch = ?outcome.verdict.base_branch(),
        "Finished documentation gate"
    );
    outcome.emit();
    Ok(outcome.exit_code())
}
