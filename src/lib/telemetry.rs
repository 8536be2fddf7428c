//! Telemetry initialization and validation run span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// Default filter when `RUST_LOG` is unset; keeps CI output limited to the report.
const DEFAULT_FILTER: &str = "warn";

/// Initialize `tracing` and format developer logs on stderr.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of one validation run.
pub struct ValidationSpan {
    span: Span,
    started_at: Instant,
    run_id: Uuid,
}

impl ValidationSpan {
    /// Start a run span.
    pub fn start(base_branch: Option<&str>) -> Self {
        let run_id = Uuid::new_v4();
        let span = info_span!(
            target: "docgate::validate",
            "validation_run",
            %run_id,
            base_branch = base_branch.unwrap_or("<auto>")
        );
        Self {
            span,
            started_at: Instant::now(),
            run_id,
        }
    }

    /// Enter the span for the duration of the returned guard.
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }

    /// Close the span while recording the verdict status.
    pub fn finish(self, status: &'static str) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "docgate::validate",
            run_id = %self.run_id,
            status = status,
            elapsed_ms = elapsed_ms,
            "Completed documentation validation"
        );
    }
}
