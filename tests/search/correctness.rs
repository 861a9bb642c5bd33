//! Which pages match a query.

use super::common::{matches, sample_index, titles};
use glean::testing::make_index;
use glean::{search, search_with, SearchOptions, SearchOutcome};

#[test]
fn test_content_match() {
    let results = matches(search(&sample_index(), "toolchain"));
    assert_eq!(titles(&results), vec!["Installation"]);
}

#[test]
fn test_title_match() {
    let index = make_index(&[("Deployment", "Nothing relevant here.")]);
    let results = matches(search(&index, "deploy"));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].url, "/deployment.html");
}

#[test]
fn test_case_insensitive() {
    let index = sample_index();
    let lower = matches(search(&index, "toml"));
    let upper = matches(search(&index, "TOML"));
    let mixed = matches(search(&index, "ToMl"));
    assert_eq!(lower, upper);
    assert_eq!(lower, mixed);
    assert_eq!(titles(&lower), vec!["Configuration"]);
}

#[test]
fn test_no_match_is_empty_not_hint() {
    let outcome = search(&sample_index(), "kubernetes");
    assert_eq!(outcome, SearchOutcome::Matches(Vec::new()));
}

#[test]
fn test_substring_inside_word() {
    // "stall" is inside "Installation" and "install"
    let results = matches(search(&sample_index(), "stall"));
    assert_eq!(titles(&results), vec!["Introduction", "Installation"]);
}

#[test]
fn test_every_result_contains_query() {
    let index = sample_index();
    let query = "the";
    for result in matches(search(&index, query)) {
        let page = index.pages.iter().find(|p| p.url == result.url).unwrap();
        assert!(
            page.title.to_lowercase().contains(query) || page.content.to_lowercase().contains(query),
            "{} does not contain {:?}",
            page.title,
            query
        );
    }
}

#[test]
fn test_min_query_len_option() {
    let index = sample_index();
    let opts = SearchOptions {
        min_query_len: 4,
        ..SearchOptions::default()
    };
    assert!(search_with(&index, "toml", &opts).results().len() == 1);
    assert!(search_with(&index, "tom", &opts).is_hint());
}

#[test]
fn test_sigma_forms_match_each_other() {
    let index = make_index(&[("Odos", "ΟΔΟΣ"), ("Other", "οδοσ"), ("None", "οδοι")]);
    let results = matches(search(&index, "οδος"));
    assert_eq!(titles(&results), vec!["Odos", "Other"]);
}
