use serde::Serialize;

use super::{GateRule, RuleTable};

/// Reason reported when no changed path falls under a gate.
pub const NO_USER_FACING_CHANGES_REASON: &str = "No user-facing code changes detected";

/// Whether a change set calls for a documentation update, and which docs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequirementResult {
    pub required: bool,
    pub reason: String,
    /// Matched gate paths, deduplicated, in rule-table order.
    pub affected_paths: Vec<String>,
    /// Union of suggestions of the matched gates, deduplicated, first-seen order.
    pub suggestions: Vec<String>,
}

impl RequirementResult {
    fn not_required() -> Self {
        Self {
            required: false,
            reason: NO_USER_FACING_CHANGES_REASON.to_string(),
            affected_paths: Vec::new(),
            suggestions: Vec::new(),
        }
    }
}

impl RuleTable {
    /// Decide whether `changed_paths` touch any gate, and collect the docs to update.
    pub fn requires_docs_update<S: AsRef<str>>(&self, changed_paths: &[S]) -> RequirementResult {
        let mut affected_paths = Vec::new();
        let mut suggestions = Vec::new();

        for rule in self.triggered_rules(changed_paths) {
            push_unique(&mut affected_paths, rule.gate.as_str());
            for suggestion in &rule.suggestions {
                push_unique(&mut suggestions, suggestion);
            }
        }

        if affected_paths.is_empty() {
            return RequirementResult::not_required();
        }

        RequirementResult {
            required: true,
            reason: format!("Changes detected in: {}", affected_paths.join(", ")),
            affected_paths,
            suggestions,
        }
    }

    /// Returns true if any changed path lives under the documentation root.
    pub fn has_docs_changes<S: AsRef<str>>(&self, changed_paths: &[S]) -> bool {
        changed_paths
            .iter()
            .any(|path| self.is_docs_path(path.as_ref()))
    }

    /// Documentation files worth updating for `changed_paths`, regardless of
    /// whether an update is strictly required.
    pub fn suggest_docs_to_update<S: AsRef<str>>(&self, changed_paths: &[S]) -> Vec<String> {
        let mut suggestions = Vec::new();
        for rule in self.triggered_rules(changed_paths) {
            for suggestion in &rule.suggestions {
                push_unique(&mut suggestions, suggestion);
            }
        }
        suggestions
    }

    fn triggered_rules<'a, S: AsRef<str>>(
        &'a self,
        changed_paths: &'a [S],
    ) -> impl Iterator<Item = &'a GateRule> + 'a {
        self.gates().iter().filter(move |rule| {
            changed_paths
                .iter()
                .any(|path| rule.gate.matches(path.as_ref()))
        })
    }
}

fn push_unique(target: &mut Vec<String>, value: &str) {
    if !target.iter().any(|existing| existing == value) {
        target.push(value.to_string());
    }
}
