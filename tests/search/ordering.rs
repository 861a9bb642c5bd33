//! Results keep index order. There is no relevance ranking.

use super::common::{matches, overlapping_index, titles};
use glean::search;

#[test]
fn test_index_order_preserved() {
    let results = matches(search(&overlapping_index(), "own"));
    // Ownership matches in the title, Rust Basics does not match at all,
    // Borrowing matches in content. Order follows the index.
    assert_eq!(titles(&results), vec!["Ownership", "Borrowing"]);
}

#[test]
fn test_title_match_not_promoted() {
    let results = matches(search(&overlapping_index(), "borrow"));
    assert_eq!(titles(&results), vec!["Borrowing", "Lifetimes"]);
}

#[test]
fn test_deterministic() {
    let index = overlapping_index();
    let first = search(&index, "rust");
    for _ in 0..10 {
        assert_eq!(search(&index, "rust"), first);
    }
}
