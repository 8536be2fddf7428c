use std::{
    env,
    io::{self, IsTerminal},
    path::Path,
};

use clap::ValueEnum;
use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const DEFAULT_GUIDELINES_DOC: &str = "docs/development/documentation.md";

/// When to emit ANSI colors in the text report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    /// Resolve `Auto` against the current stdout and `NO_COLOR`.
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal(),
        }
    }
}

/// Console report settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub color: ColorChoice,
    /// Document pointed to when documentation is missing.
    pub guidelines: String,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            color: ColorChoice::Auto,
            guidelines: DEFAULT_GUIDELINES_DOC.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawReportSection {
    pub color: Option<String>,
    pub guidelines: Option<String>,
}

pub fn parse_report_section(
    raw: Option<RawReportSection>,
    path: &Path,
) -> Result<ReportSection, ConfigError> {
    let report_raw = raw.unwrap_or_default();

    let color = match report_raw.color {
        Some(value) => ColorChoice::parse(&value).ok_or_else(|| ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "report.color",
            message: format!("`{value}` is not one of auto, always, never"),
        })?,
        None => ColorChoice::Auto,
    };

    let guidelines = report_raw
        .guidelines
        .unwrap_or_else(|| DEFAULT_GUIDELINES_DOC.to_string());
    if guidelines.trim().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "report.guidelines",
            message: "Point at the documentation guidelines file".into(),
        });
    }

    Ok(ReportSection { color, guidelines })
}
