//! Rule table mapping user-facing code paths to the documentation that should
//! accompany changes there.
//!
//! The table is an immutable value built once at startup and handed to every
//! operation, so tests can evaluate alternate tables side by side.

mod requirement;

use serde::Serialize;

use crate::lib::paths;

pub use requirement::{RequirementResult, NO_USER_FACING_CHANGES_REASON};

/// Root directory holding project documentation.
pub const DEFAULT_DOCS_ROOT: &str = "docs/";

/// A gate path: either a directory prefix (trailing `/`) or an exact file path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GatePath(String);

impl GatePath {
    pub fn new(gate: impl Into<String>) -> Self {
        Self(gate.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if a change to `path` falls under this gate.
    pub fn matches(&self, path: &str) -> bool {
        paths::is_covered_by(path, &self.0)
    }
}

/// One rule: changes under `gate` should come with updates to `suggestions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GateRule {
    pub gate: GatePath,
    pub suggestions: Vec<String>,
}

impl GateRule {
    pub fn new<I, S>(gate: impl Into<String>, suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            gate: GatePath::new(gate),
            suggestions: suggestions.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered set of gate rules plus the documentation root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleTable {
    docs_root: String,
    gates: Vec<GateRule>,
}

impl RuleTable {
    pub fn new(docs_root: impl Into<String>, gates: Vec<GateRule>) -> Self {
        Self {
            docs_root: docs_root.into(),
            gates,
        }
    }

    /// Rule table shipped with the binary.
    pub fn builtin() -> Self {
        Self::new(
            DEFAULT_DOCS_ROOT,
            vec![
                GateRule::new("src/cli/", ["docs/user-guide/cli-usage.md"]),
                GateRule::new(
                    "src/index.ts",
                    ["docs/user-guide/", "docs/architecture/overview.md"],
                ),
                GateRule::new("bin/", ["docs/user-guide/installation.md"]),
                GateRule::new("src/core/", ["docs/architecture/overview.md"]),
            ],
        )
    }

    pub fn docs_root(&self) -> &str {
        &self.docs_root
    }

    pub fn gates(&self) -> &[GateRule] {
        &self.gates
    }

    /// Rules whose gate covers `path`, in table order.
    pub fn matching_gates<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a GateRule> + 'a {
        self.gates.iter().filter(move |rule| rule.gate.matches(path))
    }

    /// Returns true if `path` falls under at least one gate.
    pub fn is_gated(&self, path: &str) -> bool {
        self.matching_gates(path).next().is_some()
    }

    /// Returns true if `path` lives under the documentation root.
    pub fn is_docs_path(&self, path: &str) -> bool {
        path.starts_with(&self.docs_root)
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_lists_gates_in_declared_order() {
        let table = RuleTable::builtin();
        let gates: Vec<&str> = table.gates().iter().map(|rule| rule.gate.as_str()).collect();
        assert_eq!(gates, ["src/cli/", "src/index.ts", "bin/", "src/core/"]);
        assert_eq!(table.docs_root(), "docs/");
    }

    #[test]
    fn every_builtin_suggestion_lives_under_docs_root() {
        let table = RuleTable::builtin();
        for rule in table.gates() {
            assert!(!rule.suggestions.is_empty(), "{:?} has no suggestions", rule.gate);
            for suggestion in &rule.suggestions {
                assert!(
                    table.is_docs_path(suggestion),
                    "{suggestion} should be under {}",
                    table.docs_root()
                );
            }
        }
    }

    #[test]
    fn matching_gates_returns_all_overlapping_rules() {
        let table = RuleTable::new(
            "docs/",
            vec![
                GateRule::new("src/", ["docs/a.md"]),
                GateRule::new("src/core/", ["docs/b.md"]),
                GateRule::new("bin/", ["docs/c.md"]),
            ],
        );
        let matched: Vec<&str> = table
            .matching_gates("src/core/engine.ts")
            .map(|rule| rule.gate.as_str())
            .collect();
        assert_eq!(matched, ["src/", "src/core/"]);
        assert!(!table.is_gated("README.md"));
    }

    #[test]
    fn docs_path_requires_root_prefix() {
        let table = RuleTable::builtin();
        assert!(table.is_docs_path("docs/user-guide/cli-usage.md"));
        assert!(!table.is_docs_path("documentation/guide.md"));
        assert!(!table.is_docs_path("src/docs/notes.md"));
    }
}
