//! Highlighting of rendered results.

use super::common::sample_index;
use glean::{render_results, search, Highlighter, ModalState};

#[test]
fn test_mark_all_occurrences() {
    let hl = Highlighter::new("c++");
    assert_eq!(
        hl.mark("C++ and c++", "[", "]"),
        "[C++] and [c++]"
    );
}

#[test]
fn test_rendered_results_highlight_query() {
    let results = search(&sample_index(), "c++").results().to_vec();
    let state = ModalState::Results {
        query: "c++".to_string(),
        results,
        selected: None,
    };
    let html = render_results(&state);
    assert!(html.contains(r#"<span class="search-highlight">C++</span> Interop"#));
    assert!(html.contains(r#"data-url="/c++-interop.html""#));
}
