// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of in-page search.
//!
//! A site ships one `search-index.json` containing every page as plain text.
//! The browser loads it once, keeps it for the lifetime of the document view,
//! and matches every keystroke against it. These types are that wire contract
//! plus the derived values the matcher hands to the renderer.
//!
//! # Invariants
//!
//! - **SearchIndex**: page order is the order of the JSON array and is never
//!   changed. Result order is derived from it.
//! - **SearchResult**: `preview` is a window of the page's `content`, never
//!   longer than `context_before + query + context_after` characters plus
//!   the ellipsis markers.
//! - **SearchOptions**: every length is counted in `char`s, so a window can
//!   never split a UTF-8 sequence.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Relative path the browser fetches the index from.
pub const DEFAULT_INDEX_PATH: &str = "search-index.json";

/// Queries shorter than this (in chars) show the hint instead of results.
pub const MIN_QUERY_LEN: usize = 2;

/// Characters of context kept before the first match.
pub const CONTEXT_BEFORE: usize = 40;

/// Characters of context kept after the end of the first match.
pub const CONTEXT_AFTER: usize = 60;

/// Preview length for pages that only matched on their title.
pub const FALLBACK_PREVIEW_LEN: usize = 100;

/// Marker placed where a preview was cut.
pub const ELLIPSIS: &str = "...";

/// One searchable page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub title: String,
    pub url: String,
    /// Whole plain-text body. Matching runs against this directly.
    pub content: String,
}

impl Page {
    pub fn new(title: impl Into<String>, url: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            content: content.into(),
        }
    }
}

/// Every page of the site, in publication order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchIndex {
    pub pages: Vec<Page>,
}

impl SearchIndex {
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// Parse the JSON asset. The index is untrusted input: anything that is
    /// not `{ "pages": [...] }` is reported as malformed, never panics.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| Error::Malformed(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Malformed(e.to_string()))
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// A matched page, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub preview: String,
}

/// What the matcher decided to show for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Query empty or too short. Not an error: the UI shows its hint.
    Hint,
    /// Matches in index order. Empty means "no results".
    Matches(Vec<SearchResult>),
}

impl SearchOutcome {
    pub fn is_hint(&self) -> bool {
        matches!(self, SearchOutcome::Hint)
    }

    /// Results, or an empty slice for the hint state.
    pub fn results(&self) -> &[SearchResult] {
        match self {
            SearchOutcome::Hint => &[],
            SearchOutcome::Matches(results) => results,
        }
    }
}

/// Tunables for matching and preview extraction.
///
/// Hosts pass this from JavaScript (or CLI flags); every field is optional
/// and falls back to the defaults above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    pub min_query_len: usize,
    pub context_before: usize,
    pub context_after: usize,
    pub fallback_len: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_query_len: MIN_QUERY_LEN,
            context_before: CONTEXT_BEFORE,
            context_after: CONTEXT_AFTER,
            fallback_len: FALLBACK_PREVIEW_LEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_index() {
        let json = br#"{"pages": [{"title": "Intro", "url": "intro.html", "content": "hello"}]}"#;
        let index = SearchIndex::from_json(json).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.pages[0].url, "intro.html");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = br#"{"version": 3, "pages": [{"title": "A", "url": "a.html", "content": "", "weight": 2}]}"#;
        let index = SearchIndex::from_json(json).unwrap();
        assert_eq!(index.pages[0].title, "A");
    }

    #[test]
    fn test_missing_pages_is_malformed() {
        let err = SearchIndex::from_json(br#"{"docs": []}"#).unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));
    }

    #[test]
    fn test_truncated_json_is_malformed() {
        let err = SearchIndex::from_json(br#"{"pages": [{"title": "#).unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));
    }

    #[test]
    fn test_options_partial_json() {
        let opts: SearchOptions = serde_json::from_str(r#"{"contextBefore": 10}"#).unwrap();
        assert_eq!(opts.context_before, 10);
        assert_eq!(opts.context_after, CONTEXT_AFTER);
        assert_eq!(opts.min_query_len, MIN_QUERY_LEN);
    }

    #[test]
    fn test_hint_has_no_results() {
        assert!(SearchOutcome::Hint.results().is_empty());
        assert!(SearchOutcome::Hint.is_hint());
    }
}
