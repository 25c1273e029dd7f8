//! Precondition checks for `patcher check`.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::error::PatchError;
use crate::core::types::Patch;
use crate::io::target::read_target;

/// Whether a patch could be applied to its target right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    Ready,
    Missing(PatchError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub name: String,
    pub path: PathBuf,
    pub status: CheckStatus,
}

impl CheckReport {
    pub fn is_ready(&self) -> bool {
        self.status == CheckStatus::Ready
    }
}

/// Evaluate every patch's preconditions without writing.
///
/// Unlike apply, this does not stop at the first missing literal. I/O errors
/// (missing or unreadable targets) still abort.
pub fn check_patches(root: &Path, patches: &[&Patch]) -> Result<Vec<CheckReport>> {
    let mut reports = Vec::with_capacity(patches.len());
    for patch in patches {
        let before = read_target(&root.join(&patch.path))?;
        let status = match patch.edit.apply(&before) {
            Ok(_) => CheckStatus::Ready,
            Err(err) => CheckStatus::Missing(err),
        };
        reports.push(CheckReport {
            name: patch.name.clone(),
            path: patch.path.clone(),
            status,
        });
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{TestProject, insert_patch, replace_patch};

    #[test]
    fn reports_every_patch() {
        let project = TestProject::new().expect("project");
        project.write("page.tsx", "import X;").expect("write");
        project.write("layout.tsx", "Billing").expect("write");
        let patches = [
            replace_patch("layout", "layout.tsx", &[("dY\"? My Ads", "My Ads")]),
            insert_patch("page", "page.tsx", "import X;", "\nline"),
        ];
        let selected: Vec<&Patch> = patches.iter().collect();

        let reports = check_patches(project.root(), &selected).expect("check");
        assert_eq!(reports.len(), 2);
        assert_eq!(
            reports[0].status,
            CheckStatus::Missing(PatchError::SnippetNotFound {
                rule: 1,
                snippet: "dY\"? My Ads".to_string()
            })
        );
        assert!(reports[1].is_ready());
    }

    #[test]
    fn never_writes() {
        let project = TestProject::new().expect("project");
        project.write("page.tsx", "import X;").expect("write");
        let patch = insert_patch("page", "page.tsx", "import X;", "\nline");

        check_patches(project.root(), &[&patch]).expect("check");
        assert_eq!(project.read("page.tsx").expect("read"), "import X;");
    }
}
