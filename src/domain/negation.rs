//! Negation detection.
//!
//! A local, position-bounded heuristic: a keyword counts as negated when a cue
//! appears within the 20 characters before it. There is no tokenization, so
//! cues also match inside other words ("not" in "cannot", "no" in "know").
//! That is a known limitation and is kept as-is because scores depend on it.

use super::keywords::{NEGATION_CUES, contains_any};

/// Characters inspected before a keyword occurrence.
pub const NEGATION_WINDOW_CHARS: usize = 20;

/// True if any negation cue occurs anywhere in `text` (lowercased).
pub fn has_negation(text: &str) -> bool {
    contains_any(text, NEGATION_CUES)
}

/// True if a negation cue occurs in the window preceding byte `offset` of `text`.
///
/// `offset` is normally the start of a keyword match. Offsets past the end are
/// clamped, and offsets inside a multi-byte character snap back to its start.
pub fn is_negated_at(text: &str, offset: usize) -> bool {
    let mut end = offset.min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    let before = &text[..end];
    let start = before
        .char_indices()
        .rev()
        .nth(NEGATION_WINDOW_CHARS - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    contains_any(&before[start..], NEGATION_CUES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_directly_before_keyword() {
        let text = "no chest pain today";
        let pos = text.find("chest pain").unwrap();
        assert!(is_negated_at(text, pos));
    }

    #[test]
    fn test_cue_outside_window_is_ignored() {
        let text = "not much to report, but i get chest pain";
        let pos = text.find("chest pain").unwrap();
        assert!(!is_negated_at(text, pos));
        assert!(has_negation(text));
    }

    #[test]
    fn test_window_is_exactly_twenty_chars() {
        // "never" ends 20 chars before the keyword: still inside the window.
        let inside = format!("never{}swelling", "x".repeat(15));
        assert!(is_negated_at(&inside, inside.find("swelling").unwrap()));

        // One more filler char pushes the first letter of the cue out.
        let outside = format!("never{}swelling", "x".repeat(16));
        assert!(!is_negated_at(&outside, outside.find("swelling").unwrap()));
    }

    #[test]
    fn test_window_counts_chars_not_bytes() {
        // 20 chars but 36 bytes before the keyword.
        let text = format!("no {} swelling", "é".repeat(16));
        assert!(is_negated_at(&text, text.find("swelling").unwrap()));
    }

    #[test]
    fn test_substring_false_positive_is_preserved() {
        // "cannot" contains "not"; accepted behavior.
        let text = "i cannot stop sweating";
        assert!(is_negated_at(text, text.find("sweating").unwrap()));
    }

    #[test]
    fn test_offset_zero_and_out_of_range() {
        assert!(!is_negated_at("swelling", 0));
        assert!(is_negated_at("not", 100));
        assert!(!has_negation(""));
    }
}
