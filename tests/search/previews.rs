//! Preview windows on real search results.

use super::common::{long_page_content, matches};
use glean::testing::make_index;
use glean::{search, search_with, SearchOptions, ELLIPSIS};

#[test]
fn test_short_page_has_no_ellipsis() {
    let index = make_index(&[("Intro", "Install the tool.")]);
    let results = matches(search(&index, "tool"));
    assert_eq!(results[0].preview, "Install the tool.");
}

#[test]
fn test_match_far_in_both_ends_cut() {
    let content = long_page_content(200, "needle", 200);
    let index = make_index(&[("Haystack", &content)]);
    let results = matches(search(&index, "needle"));
    let preview = &results[0].preview;

    assert!(preview.starts_with(ELLIPSIS));
    assert!(preview.ends_with(ELLIPSIS));
    // 40 before + 6 query + 60 after, plus two ellipses
    assert_eq!(preview.chars().count(), 40 + 6 + 60 + 2 * ELLIPSIS.len());
    assert!(preview.contains("needle"));
}

#[test]
fn test_title_only_match_uses_opening() {
    let content = "x".repeat(150);
    let index = make_index(&[("Needle Guide", &content)]);
    let results = matches(search(&index, "needle"));
    assert_eq!(results[0].preview, format!("{}{}", "x".repeat(100), ELLIPSIS));
}

#[test]
fn test_preview_keeps_original_case() {
    let index = make_index(&[("Page", "Read the README first.")]);
    let results = matches(search(&index, "readme"));
    assert!(results[0].preview.contains("README"));
}

#[test]
fn test_custom_context() {
    let content = long_page_content(50, "hit", 50);
    let index = make_index(&[("Page", &content)]);
    let opts = SearchOptions {
        context_before: 5,
        context_after: 5,
        ..SearchOptions::default()
    };
    let results = matches(search_with(&index, "hit", &opts));
    assert_eq!(results[0].preview, "...aaaaahitzzzzz...");
}

#[test]
fn test_multibyte_content() {
    let content = format!("{}café crème{}", "é".repeat(80), "ü".repeat(80));
    let index = make_index(&[("Menu", &content)]);
    let results = matches(search(&index, "crème"));
    let preview = &results[0].preview;
    assert!(preview.contains("café crème"));
    assert!(preview.starts_with(ELLIPSIS));
    assert!(preview.ends_with(ELLIPSIS));
}

#[test]
fn test_final_sigma_content_match_has_window() {
    let content = format!("{} ΟΔΟΣ tail", "x".repeat(150));
    let index = make_index(&[("Greek", &content)]);
    let results = matches(search(&index, "ος"));
    assert_eq!(results.len(), 1);
    let preview = &results[0].preview;
    assert!(preview.starts_with(ELLIPSIS), "got opening fallback: {}", preview);
    assert!(preview.contains("ΟΔΟΣ"));
}
