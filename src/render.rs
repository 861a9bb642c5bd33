// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTML for the results container.
//!
//! The host swaps the container's `innerHTML` for whatever `render_results`
//! returns after every `Render` command. Page text goes through maud's
//! escaping, so a page titled `<script>` shows up as text; only the
//! highlight spans are real markup.

use maud::{html, Markup};

use crate::controller::ModalState;
use crate::search::Highlighter;
use crate::types::SearchResult;

pub const HINT_TEXT: &str = "Start typing to search...";
pub const LOADING_TEXT: &str = "Loading search index...";
pub const NO_RESULTS_TEXT: &str = "No results found";

/// Value for the modal's `style.display`.
pub fn modal_display(state: &ModalState) -> &'static str {
    if state.is_open() {
        "flex"
    } else {
        "none"
    }
}

/// Contents of the results container for `state`.
pub fn render_results(state: &ModalState) -> String {
    results_markup(state).into_string()
}

pub fn results_markup(state: &ModalState) -> Markup {
    match state {
        ModalState::Closed => html! {},
        ModalState::Hint => html! { div.search-hint { (HINT_TEXT) } },
        ModalState::Loading { .. } => html! { div.search-hint { (LOADING_TEXT) } },
        ModalState::NoResults { .. } => html! { div.no-results { (NO_RESULTS_TEXT) } },
        ModalState::Results {
            query,
            results,
            selected,
        } => result_list(results, query, *selected),
    }
}

fn result_list(results: &[SearchResult], query: &str, selected: Option<usize>) -> Markup {
    let highlighter = Highlighter::new(query);
    html! {
        @for (i, result) in results.iter().enumerate() {
            div.search-result.selected[selected == Some(i)] data-index=(i) data-url=(result.url) {
                div.search-result-title { (highlighted(&highlighter, &result.title)) }
                div.search-result-preview { (highlighted(&highlighter, &result.preview)) }
            }
        }
    }
}

fn highlighted(highlighter: &Highlighter, text: &str) -> Markup {
    html! {
        @for fragment in highlighter.fragments(text) {
            @if fragment.highlighted {
                span.search-highlight { (fragment.text) }
            } @else {
                (fragment.text)
            }
        }
    }
}
