// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Arbitrary queries against arbitrary pages. Matching, preview slicing and
//! highlighting all index into strings by char, so any byte-offset mistake
//! shows up here as a panic on a non-ASCII boundary.

#![no_main]

use arbitrary::Arbitrary;
use glean::{render_results, search, Highlighter, ModalState, Page, SearchIndex, SearchOutcome, ELLIPSIS};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    pages: Vec<(String, String)>,
    query: String,
}

fuzz_target!(|input: Input| {
    // Cap sizes to avoid timeouts
    let query: String = input.query.chars().take(64).collect();
    let pages: Vec<Page> = input
        .pages
        .into_iter()
        .take(16)
        .enumerate()
        .map(|(i, (title, content))| Page::new(title, format!("/{}.html", i), content))
        .collect();
    let index = SearchIndex::new(pages);

    // INVARIANT 1: search() never panics
    let outcome = search(&index, &query);

    let results = match outcome {
        SearchOutcome::Hint => {
            assert!(query.chars().count() < 2);
            return;
        }
        SearchOutcome::Matches(results) => results,
    };

    // INVARIANT 2: results are a subsequence of the index
    assert!(results.len() <= index.len());
    let mut cursor = 0;
    for result in &results {
        let pos = index.pages[cursor..]
            .iter()
            .position(|p| p.url == result.url)
            .expect("result not in index order");
        cursor += pos + 1;
    }

    // INVARIANT 3: previews stay bounded
    for result in &results {
        assert!(result.preview.chars().count() <= 100 + query.chars().count() + 2 * ELLIPSIS.len());
    }

    // INVARIANT 4: highlighting preserves the text
    let highlighter = Highlighter::new(&query);
    for result in &results {
        assert_eq!(highlighter.mark(&result.title, "", ""), result.title);
    }

    let _ = render_results(&ModalState::Results {
        query,
        results,
        selected: None,
    });
});
