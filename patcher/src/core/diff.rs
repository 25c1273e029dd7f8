//! Unified diff rendering for dry runs.

use similar::TextDiff;

/// Lines of unchanged context shown around each hunk.
pub const CONTEXT_LINES: usize = 3;

/// Render a unified diff between `before` and `after`, labelled with `path`.
///
/// Returns an empty string when the texts are identical.
pub fn unified_diff(path: &str, before: &str, after: &str) -> String {
    if before == after {
        return String::new();
    }
    let old_header = format!("a/{path}");
    let new_header = format!("b/{path}");
    TextDiff::from_lines(before, after)
        .unified_diff()
        .context_radius(CONTEXT_LINES)
        .header(&old_header, &new_header)
        .to_string()
}
