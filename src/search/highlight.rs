// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match highlighting.
//!
//! Every case-insensitive occurrence of the literal query is marked. The
//! query goes through `regex::escape` before it becomes a pattern, so input
//! like `c++` or `a.b*` matches itself instead of being parsed as regex
//! syntax. Output is a list of fragments; escaping for HTML or colouring for
//! a terminal happens at the edges.

use regex::{Regex, RegexBuilder};
use serde::Serialize;

/// A run of text that is either inside or outside a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fragment<'t> {
    pub text: &'t str,
    pub highlighted: bool,
}

/// Compiled highlighter for one query.
///
/// Build it once per result set and reuse it for every title and preview.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    pub fn new(query: &str) -> Self {
        if query.is_empty() {
            return Self { pattern: None };
        }

        let pattern = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build();

        match pattern {
            Ok(pattern) => Self {
                pattern: Some(pattern),
            },
            Err(e) => {
                // Only reachable for queries past the regex size limit.
                tracing::debug!(error = %e, "query not highlightable");
                Self { pattern: None }
            }
        }
    }

    /// Split `text` into plain and highlighted fragments.
    ///
    /// Concatenating the fragment texts always yields `text` again.
    pub fn fragments<'t>(&self, text: &'t str) -> Vec<Fragment<'t>> {
        let Some(pattern) = &self.pattern else {
            return vec![Fragment {
                text,
                highlighted: false,
            }];
        };

        let mut fragments = Vec::new();
        let mut last = 0;
        for m in pattern.find_iter(text) {
            if m.start() > last {
                fragments.push(Fragment {
                    text: &text[last..m.start()],
                    highlighted: false,
                });
            }
            fragments.push(Fragment {
                text: m.as_str(),
                highlighted: true,
            });
            last = m.end();
        }
        if last < text.len() || fragments.is_empty() {
            fragments.push(Fragment {
                text: &text[last..],
                highlighted: false,
            });
        }
        fragments
    }

    /// Wrap every match in `open`/`close` markers.
    pub fn mark(&self, text: &str, open: &str, close: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for fragment in self.fragments(text) {
            if fragment.highlighted {
                out.push_str(open);
                out.push_str(fragment.text);
                out.push_str(close);
            } else {
                out.push_str(fragment.text);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_every_occurrence() {
        let h = Highlighter::new("rust");
        assert_eq!(
            h.mark("Rust and rust and RUST", "[", "]"),
            "[Rust] and [rust] and [RUST]"
        );
    }

    #[test]
    fn test_special_characters_are_literal() {
        let h = Highlighter::new("c++");
        assert_eq!(h.mark("C++ is not c+ or c", "<", ">"), "<C++> is not c+ or c");

        let h = Highlighter::new("a.b*");
        assert_eq!(h.mark("axbb a.b* A.B*", "<", ">"), "axbb <a.b*> <A.B*>");

        let h = Highlighter::new("(x|y)[0-9]$^\\");
        assert_eq!(h.mark("x(x|y)[0-9]$^\\", "<", ">"), "x<(x|y)[0-9]$^\\>");
    }

    #[test]
    fn test_no_match_single_fragment() {
        let h = Highlighter::new("zzz");
        assert_eq!(
            h.fragments("abc"),
            vec![Fragment {
                text: "abc",
                highlighted: false
            }]
        );
    }

    #[test]
    fn test_fragments_reassemble() {
        let h = Highlighter::new("ab");
        let text = "abXabYab";
        let joined: String = h.fragments(text).iter().map(|f| f.text).collect();
        assert_eq!(joined, text);
        assert_eq!(h.fragments(text).iter().filter(|f| f.highlighted).count(), 3);
    }

    #[test]
    fn test_empty_query_highlights_nothing() {
        let h = Highlighter::new("");
        assert_eq!(h.mark("anything", "<", ">"), "anything");
    }

    #[test]
    fn test_empty_text() {
        let h = Highlighter::new("ab");
        assert_eq!(h.fragments("").len(), 1);
    }
}
