// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case-insensitive string helpers.
//!
//! `str::to_lowercase` can change byte lengths ("İ" lowercases to two chars),
//! so offsets found in a lowercased copy do not map back onto the original.
//! These helpers compare char by char against the original text instead and
//! only ever return offsets on char boundaries of the haystack.

use std::ops::Range;

/// Lowercase one char. Final sigma folds to `σ` so that "ΟΔΟΣ", "οδος" and
/// "οδοσ" all compare equal wherever the sigma sits in a word.
#[inline]
fn fold_char(c: char) -> impl Iterator<Item = char> {
    c.to_lowercase().map(|l| if l == 'ς' { 'σ' } else { l })
}

/// Fold a query once so it can be reused across pages.
pub fn fold(query: &str) -> Vec<char> {
    query.chars().flat_map(fold_char).collect()
}

/// Whether `haystack` contains the already folded needle.
#[inline]
pub fn contains_folded(haystack: &str, folded_needle: &[char]) -> bool {
    find_folded(haystack, folded_needle).is_some()
}

/// Byte range of the first case-insensitive occurrence of `needle`.
///
/// # Example
///
/// ```ignore
/// assert_eq!(find_case_insensitive("Hello World", "WORLD"), Some(6..11));
/// ```
pub fn find_case_insensitive(haystack: &str, needle: &str) -> Option<Range<usize>> {
    find_folded(haystack, &fold(needle))
}

/// Byte range of the first occurrence of the folded needle.
pub fn find_folded(haystack: &str, needle: &[char]) -> Option<Range<usize>> {
    if needle.is_empty() {
        return Some(0..0);
    }

    haystack
        .char_indices()
        .find_map(|(start, _)| match_len_at(&haystack[start..], needle).map(|len| start..start + len))
}

/// Bytes of `rest` consumed by a match of `needle` at its start, if any.
fn match_len_at(rest: &str, needle: &[char]) -> Option<usize> {
    let mut pos = 0;
    for (offset, ch) in rest.char_indices() {
        for lower in fold_char(ch) {
            if pos >= needle.len() || needle[pos] != lower {
                return None;
            }
            pos += 1;
        }
        if pos == needle.len() {
            return Some(offset + ch.len_utf8());
        }
    }
    None
}

/// Char index of a byte offset known to sit on a char boundary.
#[inline]
pub fn char_index(text: &str, byte_offset: usize) -> usize {
    text[..byte_offset].chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_ascii() {
        assert_eq!(find_case_insensitive("Hello World", "WORLD"), Some(6..11));
        assert_eq!(find_case_insensitive("Hello World", "xyz"), None);
    }

    #[test]
    fn test_find_first_occurrence() {
        assert_eq!(find_case_insensitive("cat CAT cat", "cat"), Some(0..3));
        assert_eq!(find_case_insensitive("dog CAT cat", "cat"), Some(4..7));
    }

    #[test]
    fn test_find_multibyte_boundaries() {
        let text = "naïve café Über";
        let range = find_case_insensitive(text, "über").unwrap();
        assert_eq!(&text[range], "Über");
        let range = find_case_insensitive(text, "CAFÉ").unwrap();
        assert_eq!(&text[range], "café");
    }

    #[test]
    fn test_find_expanding_lowercase() {
        // 'İ' lowercases to "i\u{307}"; matching only half of it is not a match.
        assert_eq!(find_case_insensitive("İx", "ix"), None);
        let range = find_case_insensitive("aİb", "i\u{307}b").unwrap();
        assert_eq!(range, 1..4);
    }

    #[test]
    fn test_empty_needle() {
        assert_eq!(find_case_insensitive("abc", ""), Some(0..0));
    }

    #[test]
    fn test_sigma_forms_are_equal() {
        let range = find_case_insensitive("x ΟΔΟΣ tail", "ος").unwrap();
        assert_eq!(&"x ΟΔΟΣ tail"[range], "ΟΣ");
        assert!(contains_folded("οδοσ", &fold("ΟΔΟΣ")));
        assert!(contains_folded("ΟΔΟΣ", &fold("οδος")));
        assert_eq!(fold("Σς"), vec!['σ', 'σ']);
    }

    #[test]
    fn test_contains_folded() {
        assert!(contains_folded("Rust Programming", &fold("PROGRAM")));
        assert!(!contains_folded("Rust", &fold("go")));
    }

    #[test]
    fn test_char_index() {
        assert_eq!(char_index("héllo", 3), 2);
    }
}
