//! Test-only helpers for building patches and throwaway project trees.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::types::{Edit, Patch, Replacement};

/// Target of the built-in `therapist-page-dynamic` patch, before patching.
pub const THERAPIST_PAGE_PATH: &str = "app/[city]/therapist/[slug]/page.tsx";
pub const THERAPIST_PAGE: &str = r#"import { notFound, redirect } from "next/navigation";
import type { Metadata } from "next";
import { createClient } from "@/lib/supabase/server";
import ProfilePage from "@/components/profile/ProfilePage";

type Params = { city: string; slug: string };
"#;
pub const THERAPIST_PAGE_PATCHED: &str = r#"import { notFound, redirect } from "next/navigation";
import type { Metadata } from "next";
import { createClient } from "@/lib/supabase/server";
import ProfilePage from "@/components/profile/ProfilePage";

export const dynamic = "force-dynamic";

type Params = { city: string; slug: string };
"#;

/// Target of the built-in `dashboard-nav-labels` patch, before patching.
pub const DASHBOARD_LAYOUT_PATH: &str = "app/dashboard/layout.tsx";
pub const DASHBOARD_LAYOUT: &str = r#"<nav className="dashboard-nav">
  <Link href="/dashboard/ads">dY"? My Ads</Link>
  <Link href="/dashboard/billing">dY'3 Billing</Link>
  <Link href="/dashboard/settings">?s,? Settings</Link>
  <Link href="/dashboard/favorites">a?,? Favorites</Link>
  <Link href="/dashboard/support">dY>? Support</Link>
</nav>
"#;
pub const DASHBOARD_LAYOUT_PATCHED: &str = r#"<nav className="dashboard-nav">
  <Link href="/dashboard/ads">My Ads</Link>
  <Link href="/dashboard/billing">Billing</Link>
  <Link href="/dashboard/settings">Settings</Link>
  <Link href="/dashboard/favorites">Favorites</Link>
  <Link href="/dashboard/support">Support</Link>
</nav>
"#;

/// Temporary project root that is removed on drop.
pub struct TestProject {
    temp: TempDir,
}

impl TestProject {
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create temp project")?;
        Ok(Self { temp })
    }

    /// Project seeded with the unpatched targets of the built-in manifest.
    pub fn with_builtin_targets() -> Result<Self> {
        let project = Self::new()?;
        project.write(THERAPIST_PAGE_PATH, THERAPIST_PAGE)?;
        project.write(DASHBOARD_LAYOUT_PATH, DASHBOARD_LAYOUT)?;
        Ok(project)
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// Write `contents` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, contents: &str) -> Result<PathBuf> {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    pub fn read(&self, relative: &str) -> Result<String> {
        let path = self.root().join(relative);
        fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))
    }
}

/// Create an `insert_after` patch.
pub fn insert_patch(name: &str, path: &str, anchor: &str, insert: &str) -> Patch {
    Patch {
        name: name.to_string(),
        path: PathBuf::from(path),
        edit: Edit::InsertAfter {
            anchor: anchor.to_string(),
            insert: insert.to_string(),
        },
    }
}

/// Create a `replace` patch from `(old, new)` pairs.
pub fn replace_patch(name: &str, path: &str, rules: &[(&str, &str)]) -> Patch {
    Patch {
        name: name.to_string(),
        path: PathBuf::from(path),
        edit: Edit::Replace {
            rules: rules
                .iter()
                .map(|(old, new)| Replacement::new(*old, *new))
                .collect(),
        },
    }
}
