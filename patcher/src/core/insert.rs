//! Insert text after a literal anchor.

use super::error::PatchError;

/// Insert `insert` immediately after the first occurrence of `anchor`.
///
/// The anchor itself is kept, so applying the same insertion twice yields a
/// duplicate rather than an error.
pub fn insert_after_anchor(text: &str, anchor: &str, insert: &str) -> Result<String, PatchError> {
    let start = text.find(anchor).ok_or_else(|| PatchError::AnchorNotFound {
        anchor: anchor.to_string(),
    })?;
    let split = start + anchor.len();

    let mut patched = String::with_capacity(text.len() + insert.len());
    patched.push_str(&text[..split]);
    patched.push_str(insert);
    patched.push_str(&text[split..]);
    Ok(patched)
}
