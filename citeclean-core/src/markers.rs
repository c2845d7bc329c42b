// citeclean-core/src/markers.rs
//! Cite-marker matching and removal.
//!
//! The marker set is fixed by design: the standalone `[cite_start]` token and
//! bracketed `[cite: ...]` annotations. Both are folded into one alternation
//! that is compiled once and shared process-wide.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

lazy_static! {
    /// The combined removal pattern.
    ///
    /// The bracketed arm excludes `]` from its inner content, so each match
    /// terminates at the nearest following `]` and never spans across
    /// adjacent bracket groups. An unterminated `[cite:` with no closing `]`
    /// anywhere in the input is simply not a match.
    static ref CITE_MARKER: Regex =
        Regex::new(r"\[cite_start\]|\[cite:[^\]]*\]").unwrap();
}

/// Returns true iff `text` contains at least one cite marker.
pub fn has_markers(text: &str) -> bool {
    CITE_MARKER.is_match(text)
}

/// Returns `text` with every non-overlapping cite marker removed.
///
/// Matches are found left-to-right in a single pass; replaced regions are not
/// re-scanned, so the operation is idempotent. Returns `Cow::Borrowed` when
/// nothing matched.
pub fn strip_markers(text: &str) -> Cow<'_, str> {
    CITE_MARKER.replace_all(text, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_untouched() {
        let input = "No markers here, just [brackets] and cite words.";
        assert!(!has_markers(input));
        assert_eq!(strip_markers(input), input);
    }

    #[test]
    fn removes_both_marker_kinds() {
        assert_eq!(strip_markers("A[cite_start]B[cite: p.12]C"), "ABC");
    }

    #[test]
    fn unterminated_bracket_is_not_a_match() {
        let input = "[cite:unterminated no closing bracket";
        assert!(!has_markers(input));
        assert_eq!(strip_markers(input), input);
    }

    #[test]
    fn adjacent_groups_do_not_span() {
        assert_eq!(strip_markers("[cite: x][cite: y]"), "");
    }

    #[test]
    fn stripping_is_idempotent() {
        let input = "one [cite_start]two [cite: 3] three [cite:]";
        let once = strip_markers(input).into_owned();
        assert!(!has_markers(&once));
        assert_eq!(strip_markers(&once), once);
    }

    #[test]
    fn bracketed_match_runs_to_nearest_terminator() {
        // The bracketed arm runs to the nearest `]`, even across whitespace
        // and newlines within the group.
        assert_eq!(strip_markers("a[cite: multi\nline]b"), "ab");
    }
}
