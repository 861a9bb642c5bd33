//! Boundary inputs.

use super::common::{matches, sample_index, titles};
use glean::testing::make_index;
use glean::{search, SearchIndex, SearchOutcome};

#[test]
fn test_empty_query_is_hint() {
    assert!(search(&sample_index(), "").is_hint());
}

#[test]
fn test_single_char_is_hint() {
    assert!(search(&sample_index(), "a").is_hint());
    assert!(search(&sample_index(), "é").is_hint());
}

#[test]
fn test_two_chars_searches() {
    assert!(!search(&sample_index(), "in").is_hint());
}

#[test]
fn test_empty_index() {
    let outcome = search(&SearchIndex::default(), "anything");
    assert_eq!(outcome, SearchOutcome::Matches(Vec::new()));
}

#[test]
fn test_regex_characters_are_literal() {
    let results = matches(search(&sample_index(), "c++"));
    assert_eq!(titles(&results), vec!["C++ Interop"]);
    assert!(matches(search(&sample_index(), ".*")).is_empty());
}

#[test]
fn test_empty_content_page() {
    let index = make_index(&[("Changelog", "")]);
    let results = matches(search(&index, "change"));
    assert_eq!(results[0].preview, "...");
}

#[test]
fn test_whitespace_query_is_literal() {
    let index = make_index(&[("Page", "two  spaces")]);
    assert_eq!(matches(search(&index, "  ")).len(), 1);
    assert!(matches(search(&index, "   ")).is_empty());
}
