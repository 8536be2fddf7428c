//! ANSI styling for the console report.

use crate::git::ChangeStatus;

const RESET: &str = "\u{1b}[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Green,
    Yellow,
    Red,
    Cyan,
}

impl Tone {
    const fn code(self) -> &'static str {
        match self {
            Tone::Green => "\u{1b}[32m",
            Tone::Yellow => "\u{1b}[33m",
            Tone::Red => "\u{1b}[31m",
            Tone::Cyan => "\u{1b}[36m",
        }
    }
}

/// Wraps text in ANSI color codes when enabled.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn paint(&self, tone: Tone, text: &str) -> String {
        if self.enabled {
            format!("{}{text}{RESET}", tone.code())
        } else {
            text.to_string()
        }
    }
}

/// Marker and tone for a change line.
pub const fn change_marker(status: ChangeStatus) -> (&'static str, Tone) {
    match status {
        ChangeStatus::Added => ("+", Tone::Green),
        ChangeStatus::Modified => ("~", Tone::Yellow),
        ChangeStatus::Deleted => ("-", Tone::Red),
        ChangeStatus::Renamed => (">", Tone::Cyan),
    }
}
