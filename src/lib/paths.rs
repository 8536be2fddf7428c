//! Shared helpers for repository-relative path handling.

/// Separator used in repository-relative paths reported by git.
pub const REPO_PATH_SEPARATOR: char = '/';

/// Returns true if `gate` names a directory (ends with the path separator).
fn is_directory_gate(gate: &str) -> bool {
    gate.ends_with(REPO_PATH_SEPARATOR)
}

/// Returns true if `path` is covered by `gate`.
///
/// Directory gates match by prefix; file gates match only the identical path.
pub fn is_covered_by(path: &str, gate: &str) -> bool {
    if is_directory_gate(gate) {
        path.starts_with(gate)
    } else {
        path == gate
    }
}
