// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result snippets.
//!
//! The preview is a window around the first match: `context_before` chars
//! before it, the query, then `context_after` chars, clamped to the content.
//! A cut end gets an ellipsis. Title-only matches have nothing to centre on
//! and fall back to the opening of the page.

use super::utils::{char_index, find_case_insensitive};
use crate::types::{SearchOptions, ELLIPSIS};

/// Snippet of `content` around the first case-insensitive `query` match.
///
/// # Example
///
/// ```ignore
/// let content = "x".repeat(150) + "needle" + &"y".repeat(44);
/// let preview = extract_preview(&content, "needle", &SearchOptions::default());
/// assert!(preview.starts_with("..."));
/// ```
pub fn extract_preview(content: &str, query: &str, options: &SearchOptions) -> String {
    let Some(found) = find_case_insensitive(content, query) else {
        return opening(content, options.fallback_len);
    };

    let total = content.chars().count();
    let match_start = char_index(content, found.start);
    // The matched text can be shorter than the query: "İ" matches "i\u{307}".
    let match_end = match_start + content[found].chars().count();
    let start = match_start.saturating_sub(options.context_before);
    let end = (match_end + options.context_after).min(total);

    let mut preview = String::with_capacity(end.saturating_sub(start) + 2 * ELLIPSIS.len());
    if start > 0 {
        preview.push_str(ELLIPSIS);
    }
    preview.extend(content.chars().skip(start).take(end.saturating_sub(start)));
    if end < total {
        preview.push_str(ELLIPSIS);
    }
    preview
}

/// First `len` chars of the page, always followed by an ellipsis.
fn opening(content: &str, len: usize) -> String {
    let mut preview: String = content.chars().take(len).collect();
    preview.push_str(ELLIPSIS);
    preview
}
