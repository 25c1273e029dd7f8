//! Orchestration for `patcher apply`.
//!
//! Each patch is read, checked, and written independently. The first failure
//! aborts the run: patches after it are not attempted, and the failing patch
//! writes nothing.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::core::diff::unified_diff;
use crate::core::types::Patch;
use crate::io::target::{read_target, write_target};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyOptions {
    /// Compute edits and render diffs without writing.
    pub dry_run: bool,
}

/// Result of one successfully applied (or dry-run) patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedPatch {
    pub name: String,
    pub path: PathBuf,
    pub bytes_before: usize,
    pub bytes_after: usize,
    /// Unified diff, populated on dry runs only.
    pub diff: Option<String>,
}

/// Apply a single patch against `root`.
pub fn apply_patch(root: &Path, patch: &Patch, options: &ApplyOptions) -> Result<AppliedPatch> {
    let target = root.join(&patch.path);
    let before = read_target(&target)?;

    for (literal, count) in patch.edit.repeated_literals(&before) {
        warn!(
            patch = %patch.name,
            literal,
            count,
            "literal occurs more than once; only the first occurrence is patched"
        );
    }

    let after = patch
        .edit
        .apply(&before)
        .with_context(|| format!("patch '{}' on {}", patch.name, target.display()))?;

    let diff = if options.dry_run {
        Some(unified_diff(&patch.path.to_string_lossy(), &before, &after))
    } else {
        write_target(&target, &after)?;
        info!(patch = %patch.name, path = %target.display(), "patch applied");
        None
    };

    Ok(AppliedPatch {
        name: patch.name.clone(),
        path: patch.path.clone(),
        bytes_before: before.len(),
        bytes_after: after.len(),
        diff,
    })
}

/// Apply patches in order, stopping at the first failure.
pub fn apply_all(
    root: &Path,
    patches: &[&Patch],
    options: &ApplyOptions,
) -> Result<Vec<AppliedPatch>> {
    let mut applied = Vec::with_capacity(patches.len());
    for patch in patches {
        applied.push(apply_patch(root, patch, options)?);
    }
    Ok(applied)
}
