//! Selection helpers for `patcher apply` and `patcher check`.

use anyhow::{Result, anyhow};

use crate::core::types::Patch;

/// Restrict `patches` to the names in `only`, keeping manifest order.
///
/// An empty `only` selects every patch. Unknown names are an error so a typo
/// never silently turns a run into a no-op.
pub fn select_patches<'a>(patches: &'a [Patch], only: &[String]) -> Result<Vec<&'a Patch>> {
    if only.is_empty() {
        return Ok(patches.iter().collect());
    }
    let unknown: Vec<&str> = only
        .iter()
        .filter(|name| !patches.iter().any(|patch| &patch.name == *name))
        .map(String::as_str)
        .collect();
    if !unknown.is_empty() {
        return Err(anyhow!("unknown patch name(s): {}", unknown.join(", ")));
    }
    Ok(patches
        .iter()
        .filter(|patch| only.contains(&patch.name))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{insert_patch, replace_patch};

    fn patches() -> Vec<Patch> {
        vec![
            insert_patch("page", "page.tsx", "import X;", "\nline"),
            replace_patch("layout", "layout.tsx", &[("a", "b")]),
        ]
    }

    #[test]
    fn empty_filter_selects_all() {
        let patches = patches();
        let selected = select_patches(&patches, &[]).expect("select");
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn filter_keeps_manifest_order() {
        let patches = patches();
        let only = vec!["layout".to_string(), "page".to_string()];
        let names: Vec<&str> = select_patches(&patches, &only)
            .expect("select")
            .iter()
            .map(|patch| patch.name.as_str())
            .collect();
        assert_eq!(names, vec!["page", "layout"]);
    }

    #[test]
    fn unknown_name_is_error() {
        let patches = patches();
        let err = select_patches(&patches, &["nope".to_string()]).expect_err("unknown");
        assert_eq!(err.to_string(), "unknown patch name(s): nope");
    }
}
