//! Precondition failures raised by the pure patch logic.

use thiserror::Error;

/// A required literal was not present in the text being patched.
///
/// This is the only failure the core can produce. Anything else (missing
/// files, unreadable manifests) is an I/O concern and surfaces as `anyhow`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    #[error("anchor not found: {anchor:?}")]
    AnchorNotFound { anchor: String },

    /// `rule` is 1-based, in declared order.
    #[error("snippet for rule {rule} not found: {snippet:?}")]
    SnippetNotFound { rule: usize, snippet: String },
}
