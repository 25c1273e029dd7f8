//! Literal occurrence counting.

/// Count non-overlapping occurrences of `needle` in `text`.
///
/// An empty needle counts as zero occurrences.
pub fn count_occurrences(text: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    text.matches(needle).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_non_overlapping() {
        assert_eq!(count_occurrences("aaaa", "aa"), 2);
        assert_eq!(count_occurrences("import X; import X;", "import X;"), 2);
        assert_eq!(count_occurrences("abc", "z"), 0);
    }

    #[test]
    fn empty_needle_is_zero() {
        assert_eq!(count_occurrences("abc", ""), 0);
    }
}
