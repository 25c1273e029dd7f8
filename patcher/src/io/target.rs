//! Whole-file reads and writes for patch targets.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::debug;

/// Read the full text of a patch target.
pub fn read_target(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(anyhow!("missing file {}", path.display()));
    }
    if !path.is_file() {
        return Err(anyhow!("expected file {}", path.display()));
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    debug!(path = %path.display(), bytes = contents.len(), "read target");
    Ok(contents)
}

/// Overwrite a patch target with `contents`. No backup is kept.
pub fn write_target(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote target");
    Ok(())
}
