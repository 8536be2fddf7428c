//! Load and validate runtime settings.
//!
//! Settings tune base branch detection and report presentation only; the
//! rule table itself is fixed at build time.
use std::{
    env,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::error;

use crate::lib::errors::ConfigError;

pub mod git;
pub mod report;
pub mod telemetry;

pub use git::{parse_git_section, GitSection, RawGitSection};
pub use report::{
    parse_report_section, ColorChoice, RawReportSection, ReportSection, DEFAULT_GUIDELINES_DOC,
};

pub const CONFIG_ENV_KEY: &str = "DOCGATE_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "docgate.toml";

/// Top-level settings container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub git: GitSection,
    pub report: ReportSection,
    /// File the settings were read from; `None` when built-in defaults apply.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawSettings {
    git: Option<RawGitSection>,
    report: Option<RawReportSection>,
}

impl Settings {
    /// Prefer `DOCGATE_CONFIG_PATH` if set; otherwise read `<repo_dir>/docgate.toml` when present.
    pub fn load_from_env_or_default(repo_dir: &Path) -> Result<Self, ConfigError> {
        match env::var(CONFIG_ENV_KEY) {
            Ok(value) if !value.trim().is_empty() => {
                let path = PathBuf::from(value);
                telemetry::log_env_source(&path, true);
                Self::load_from_path(path)
            }
            _ => {
                let path = repo_dir.join(DEFAULT_CONFIG_PATH);
                telemetry::log_env_source(&path, false);
                Self::load_if_present(path)
            }
        }
    }

    /// Load settings from `path`, falling back to defaults when the file does not exist.
    pub fn load_if_present(path: PathBuf) -> Result<Self, ConfigError> {
        if !path.is_file() {
            telemetry::log_defaults(&path);
            return Ok(Self::default());
        }
        Self::load_from_path(path)
    }

    /// Load settings from a specific path; the file must exist.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from(path.clone()).format(config::FileFormat::Toml));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "docgate::config",
                path = %path.display(),
                reason = %error,
                "Failed to read settings file"
            );
            error
        })?;

        let raw: RawSettings = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "docgate::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse settings file"
            );
            error
        })?;

        let settings = Self::from_raw(raw, &path).map_err(|err| {
            error!(
                target: "docgate::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate settings file"
            );
            err
        })?;

        telemetry::log_loaded(&settings);
        Ok(settings)
    }

    fn from_raw(raw: RawSettings, path: &Path) -> Result<Self, ConfigError> {
        let git = parse_git_section(raw.git, path)?;
        let report = parse_report_section(raw.report, path)?;

        Ok(Self {
            git,
            report,
            source_path: Some(path.to_path_buf()),
        })
    }
}
