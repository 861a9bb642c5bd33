//! Shared test utilities and fixtures.

#![allow(dead_code)]

use glean::testing::make_index;
use glean::{SearchIndex, SearchOutcome, SearchResult};

// Re-export canonical test utilities from glean::testing
pub use glean::testing::{index_json, make_page, sample_index};

// ============================================================================
// FIXTURES
// ============================================================================

/// Pages whose titles and bodies overlap on purpose, for ordering tests.
pub fn overlapping_index() -> SearchIndex {
    make_index(&[
        ("Rust Basics", "Variables, functions and control flow."),
        ("Ownership", "Every value in Rust has a single owner."),
        ("Borrowing", "References let you use a value without taking ownership."),
        ("Lifetimes", "The borrow checker compares scopes."),
    ])
}

/// A page with a long body and one match far from the start.
pub fn long_page_content(prefix: usize, needle: &str, suffix: usize) -> String {
    format!("{}{}{}", "a".repeat(prefix), needle, "z".repeat(suffix))
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Unwrap a `Matches` outcome, failing on `Hint`.
#[track_caller]
pub fn matches(outcome: SearchOutcome) -> Vec<SearchResult> {
    match outcome {
        SearchOutcome::Matches(results) => results,
        SearchOutcome::Hint => panic!("expected matches, got hint"),
    }
}

pub fn titles(results: &[SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.title.as_str()).collect()
}
