//! In-memory patch model shared by the core and I/O layers.

use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

use super::error::PatchError;
use super::insert::insert_after_anchor;
use super::occurrences::count_occurrences;
use super::replace::apply_replacements;

/// One literal `old -> new` substitution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Replacement {
    pub old: String,
    pub new: String,
}

impl Replacement {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }
}

/// The edit a patch performs on its target text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Insert `insert` right after the first occurrence of `anchor`.
    InsertAfter { anchor: String, insert: String },
    /// Apply `rules` in order, each to the first occurrence of its `old`.
    Replace { rules: Vec<Replacement> },
}

impl Edit {
    /// Compute the patched text, or the first precondition that failed.
    pub fn apply(&self, text: &str) -> Result<String, PatchError> {
        match self {
            Edit::InsertAfter { anchor, insert } => insert_after_anchor(text, anchor, insert),
            Edit::Replace { rules } => apply_replacements(text, rules),
        }
    }

    /// Required literals that occur more than once where they are matched,
    /// with their counts.
    ///
    /// Replace rules are counted against the text left by the rules before
    /// them, the same text `apply` matches them in. Only the first occurrence
    /// is ever touched; this exists so callers can report the ambiguity.
    pub fn repeated_literals<'a>(&'a self, text: &str) -> Vec<(&'a str, usize)> {
        let mut repeated = Vec::new();
        match self {
            Edit::InsertAfter { anchor, .. } => {
                let count = count_occurrences(text, anchor);
                if count > 1 {
                    repeated.push((anchor.as_str(), count));
                }
            }
            Edit::Replace { rules } => {
                let mut current = text.to_string();
                for rule in rules {
                    let count = count_occurrences(&current, &rule.old);
                    if count == 0 {
                        break;
                    }
                    if count > 1 {
                        repeated.push((rule.old.as_str(), count));
                    }
                    current = current.replacen(rule.old.as_str(), &rule.new, 1);
                }
            }
        }
        repeated
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edit::InsertAfter { .. } => write!(f, "insert_after"),
            Edit::Replace { rules } if rules.len() == 1 => write!(f, "replace (1 rule)"),
            Edit::Replace { rules } => write!(f, "replace ({} rules)", rules.len()),
        }
    }
}

/// A named edit bound to a file path relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    pub name: String,
    pub path: PathBuf,
    pub edit: Edit,
}
