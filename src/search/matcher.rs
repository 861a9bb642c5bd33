// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Linear substring scan over the index.

use super::preview::extract_preview;
use super::utils::{contains_folded, fold};
use crate::types::{Page, SearchIndex, SearchOptions, SearchOutcome, SearchResult};

/// Search with default options.
///
/// # Example
///
/// ```ignore
/// match search(&index, "install") {
///     SearchOutcome::Hint => show_hint(),
///     SearchOutcome::Matches(results) => render(results),
/// }
/// ```
pub fn search(index: &SearchIndex, query: &str) -> SearchOutcome {
    search_with(index, query, &SearchOptions::default())
}

/// Match `query` against every page, keeping index order.
///
/// Queries shorter than `min_query_len` chars (and the empty query, whatever
/// the option says) produce [`SearchOutcome::Hint`].
pub fn search_with(index: &SearchIndex, query: &str, options: &SearchOptions) -> SearchOutcome {
    if shows_hint(query, options) {
        return SearchOutcome::Hint;
    }

    let folded = fold(query);
    let results = index
        .pages
        .iter()
        .filter(|page| page_matches(page, &folded))
        .map(|page| SearchResult {
            title: page.title.clone(),
            url: page.url.clone(),
            preview: extract_preview(&page.content, query, options),
        })
        .collect();

    SearchOutcome::Matches(results)
}

/// Whether `query` is too short to search (the empty query always is).
#[inline]
pub fn shows_hint(query: &str, options: &SearchOptions) -> bool {
    query.chars().count() < options.min_query_len.max(1)
}

/// Title and content are tested independently; either is enough.
///
/// `folded_query` comes from [`fold`]; preview extraction folds the same way,
/// so a content match always has a window to show.
#[inline]
pub fn page_matches(page: &Page, folded_query: &[char]) -> bool {
    contains_folded(&page.title, folded_query) || contains_folded(&page.content, folded_query)
}
