//! Patch manifest stored at `<root>/patches.toml`.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use tracing::debug;

use crate::core::types::{Edit, Patch, Replacement};

/// Manifest file name looked up under the project root.
pub const DEFAULT_MANIFEST_NAME: &str = "patches.toml";

/// Patch set used when no manifest exists on disk.
pub const BUILTIN_MANIFEST: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/defaults/patches.toml"));

/// Patch manifest (TOML).
///
/// Patches run in file order. Intended to be edited by humans.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(rename = "patch", default)]
    pub patches: Vec<PatchEntry>,
}

/// One `[[patch]]` table as written on disk.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PatchEntry {
    pub name: String,
    /// Target file, relative to the project root.
    pub path: PathBuf,
    pub kind: PatchKind,
    /// `insert_after` only.
    #[serde(default)]
    pub anchor: Option<String>,
    /// `insert_after` only.
    #[serde(default)]
    pub insert: Option<String>,
    /// `replace` only, applied in order.
    #[serde(default)]
    pub rules: Vec<Replacement>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PatchKind {
    InsertAfter,
    Replace,
}

impl Manifest {
    pub fn validate(&self) -> Result<()> {
        if self.patches.is_empty() {
            return Err(anyhow!("manifest must declare at least one [[patch]]"));
        }
        let mut seen = HashSet::new();
        for entry in &self.patches {
            entry.validate()?;
            if !seen.insert(entry.name.as_str()) {
                return Err(anyhow!("duplicate patch name '{}'", entry.name));
            }
        }
        Ok(())
    }

    /// Validate and convert into the core patch model.
    pub fn into_patches(self) -> Result<Vec<Patch>> {
        self.validate()?;
        Ok(self.patches.into_iter().map(PatchEntry::into_patch).collect())
    }
}

impl PatchEntry {
    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(anyhow!("patch name must be non-empty"));
        }
        let name = &self.name;
        if self.path.as_os_str().is_empty() {
            return Err(anyhow!("patch '{name}': path must be non-empty"));
        }
        if self.path.is_absolute() {
            return Err(anyhow!(
                "patch '{name}': path must be relative to the project root, got {}",
                self.path.display()
            ));
        }
        match self.kind {
            PatchKind::InsertAfter => {
                if self.anchor.as_deref().is_none_or(str::is_empty) {
                    return Err(anyhow!("patch '{name}': insert_after needs a non-empty anchor"));
                }
                if self.insert.as_deref().is_none_or(str::is_empty) {
                    return Err(anyhow!("patch '{name}': insert_after needs a non-empty insert"));
                }
                if !self.rules.is_empty() {
                    return Err(anyhow!("patch '{name}': insert_after does not take rules"));
                }
            }
            PatchKind::Replace => {
                if self.rules.is_empty() {
                    return Err(anyhow!("patch '{name}': replace needs at least one rule"));
                }
                if self.anchor.is_some() || self.insert.is_some() {
                    return Err(anyhow!(
                        "patch '{name}': replace does not take anchor or insert"
                    ));
                }
                for (index, rule) in self.rules.iter().enumerate() {
                    if rule.old.is_empty() {
                        return Err(anyhow!(
                            "patch '{name}': rule {} has an empty old snippet",
                            index + 1
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    /// Convert a validated entry.
    fn into_patch(self) -> Patch {
        let edit = match self.kind {
            PatchKind::InsertAfter => Edit::InsertAfter {
                anchor: self.anchor.unwrap_or_default(),
                insert: self.insert.unwrap_or_default(),
            },
            PatchKind::Replace => Edit::Replace { rules: self.rules },
        };
        Patch {
            name: self.name,
            path: self.path,
            edit,
        }
    }
}

/// Parse and validate manifest text.
pub fn parse_manifest(contents: &str) -> Result<Vec<Patch>> {
    let manifest: Manifest = toml::from_str(contents).context("decode manifest toml")?;
    manifest.into_patches()
}

/// Where the manifest path came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    /// `<root>/patches.toml`; falls back to the built-in patch set when missing.
    Default(PathBuf),
    /// Named with `--manifest`; must exist.
    Explicit(PathBuf),
}

impl ManifestSource {
    pub fn path(&self) -> &Path {
        match self {
            ManifestSource::Default(path) | ManifestSource::Explicit(path) => path,
        }
    }
}

/// Load patches from a TOML manifest.
///
/// A missing default manifest yields the built-in patch set. A missing
/// explicit manifest is an error.
pub fn load_manifest(source: &ManifestSource) -> Result<Vec<Patch>> {
    let path = source.path();
    if !path.exists() {
        if let ManifestSource::Explicit(_) = source {
            return Err(anyhow!("missing manifest {}", path.display()));
        }
        debug!(path = %path.display(), "manifest missing, using built-in patches");
        return parse_manifest(BUILTIN_MANIFEST).context("parse built-in manifest");
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_manifest(&contents).with_context(|| format!("parse {}", path.display()))
}

/// Write the built-in manifest to `path` (temp file + rename).
///
/// Fails if `path` already exists unless `force` is set.
pub fn write_builtin_manifest(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(anyhow!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ));
    }
    write_atomic(path, BUILTIN_MANIFEST)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp manifest {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace manifest {}", path.display()))?;
    Ok(())
}
