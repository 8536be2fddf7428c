//! Presentation of validation verdicts: colorized console text or JSON.
mod style;

use std::fmt::Write as _;

use clap::ValueEnum;

use crate::{
    git::{Diff, FileChange},
    rules::RuleTable,
    settings::DEFAULT_GUIDELINES_DOC,
    validate::{CheckedRun, SkippedRun, ValidationVerdict},
};

pub use style::{change_marker, Painter, Tone};

pub const HEADER: &str = "🔍 Validating documentation updates...";

/// Output format for the verdict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Presentation options resolved from CLI flags and settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub format: ReportFormat,
    pub color: bool,
    pub guidelines: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            format: ReportFormat::Text,
            color: false,
            guidelines: DEFAULT_GUIDELINES_DOC.to_string(),
        }
    }
}

/// A rendered report split by destination stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub stdout: String,
    pub stderr: String,
}

impl Rendered {
    fn stdout(stdout: String) -> Self {
        Self {
            stdout,
            stderr: String::new(),
        }
    }
}

/// Render `verdict` in the requested format.
///
/// Text Error reports keep the header on stdout and put the error line on
/// stderr; JSON always goes to stdout.
pub fn render(
    verdict: &ValidationVerdict,
    rules: &RuleTable,
    options: &ReportOptions,
) -> serde_json::Result<Rendered> {
    match (options.format, verdict) {
        (ReportFormat::Text, ValidationVerdict::Error(failed)) => {
            let painter = Painter::new(options.color);
            Ok(Rendered {
                stdout: format!("{HEADER}\n\n"),
                stderr: error_line(&painter, &failed.cause),
            })
        }
        (ReportFormat::Text, _) => Ok(Rendered::stdout(render_text(verdict, rules, options))),
        (ReportFormat::Json, _) => render_json(verdict).map(Rendered::stdout),
    }
}

/// Pretty JSON with the verdict status as tag.
pub fn render_json(verdict: &ValidationVerdict) -> serde_json::Result<String> {
    serde_json::to_string_pretty(verdict)
}

/// Human-readable console report.
pub fn render_text(verdict: &ValidationVerdict, rules: &RuleTable, options: &ReportOptions) -> String {
    let painter = Painter::new(options.color);
    let mut out = String::new();
    let _ = writeln!(out, "{HEADER}\n");

    match verdict {
        ValidationVerdict::Error(failed) => out.push_str(&error_line(&painter, &failed.cause)),
        ValidationVerdict::Skipped(skipped) => write_skipped(&mut out, &painter, skipped),
        ValidationVerdict::Passed(run) => {
            write_checked_preamble(&mut out, &painter, rules, run);
            let _ = writeln!(
                out,
                "{}\n",
                painter.paint(Tone::Green, "✅ Documentation validation passed")
            );
            let _ = writeln!(out, "Documentation updated:");
            write_changes(
                &mut out,
                &painter,
                run.diff.files.iter().filter(|file| rules.is_docs_path(&file.path)),
            );
            let _ = writeln!(out, "\nAll checks passed!");
        }
        ValidationVerdict::Warning(run) => {
            write_checked_preamble(&mut out, &painter, rules, run);
            let _ = writeln!(
                out,
                "{}\n",
                painter.paint(Tone::Yellow, "⚠️  Documentation update recommended but not found")
            );
            let _ = writeln!(out, "{}", run.requirement.reason);
            let _ = writeln!(out, "Documentation updated: {}\n", painter.paint(Tone::Red, "NO"));
            if !run.requirement.suggestions.is_empty() {
                let _ = writeln!(out, "{}", painter.paint(Tone::Cyan, "💡 Suggestions:"));
                for suggestion in &run.requirement.suggestions {
                    let _ = writeln!(out, "  - Update {suggestion}");
                }
                out.push('\n');
            }
            let _ = writeln!(out, "Consider updating the relevant documentation.");
            let _ = writeln!(out, "See {} for guidelines.", options.guidelines);
        }
    }

    out
}

fn error_line(painter: &Painter, cause: &str) -> String {
    format!("{} {cause}\n", painter.paint(Tone::Red, "❌ Error:"))
}

fn write_skipped(out: &mut String, painter: &Painter, skipped: &SkippedRun) {
    let _ = writeln!(out, "{}", painter.paint(Tone::Yellow, &format!("⚠️  {}", skipped.reason)));
    if let Some(base_branch) = &skipped.base_branch {
        write_base_branch(out, painter, base_branch);
    }
    if let Some(diff) = skipped.diff.as_ref().filter(|diff| !diff.is_empty()) {
        let _ = writeln!(out, "Changes detected:");
        write_changes(out, painter, diff.files.iter());
        out.push('\n');
    }
    let _ = writeln!(out, "\nValidation skipped.");
}

fn write_checked_preamble(out: &mut String, painter: &Painter, rules: &RuleTable, run: &CheckedRun) {
    write_base_branch(out, painter, &run.base_branch);
    let _ = writeln!(out, "Changes detected in user-facing code:");
    write_changes(out, painter, gated_files(&run.diff, rules));
    out.push('\n');
}

fn write_base_branch(out: &mut String, painter: &Painter, base_branch: &str) {
    let _ = writeln!(out, "Base branch detected: {}", painter.paint(Tone::Cyan, base_branch));
    let _ = writeln!(
        out,
        "Comparing: {}\n",
        painter.paint(Tone::Cyan, &format!("{base_branch}...HEAD"))
    );
}

fn write_changes<'a>(out: &mut String, painter: &Painter, files: impl Iterator<Item = &'a FileChange>) {
    for file in files {
        let (marker, tone) = change_marker(file.status);
        let _ = writeln!(out, "  {} {}", painter.paint(tone, marker), file.path);
    }
}

fn gated_files<'a>(diff: &'a Diff, rules: &'a RuleTable) -> impl Iterator<Item = &'a FileChange> + 'a {
    diff.files.iter().filter(move |file| rules.is_gated(&file.path))
}
