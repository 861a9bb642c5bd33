// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Markdown to searchable plain text.
//!
//! Not a Markdown parser. Markers that readers never type into a search box
//! are dropped line by line; fenced code is kept verbatim because people do
//! search for function names and flags.

/// Remove heading, list, quote, emphasis and inline-code markers.
pub fn strip_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_code_block = false;

    for line in text.lines() {
        if line.trim_start().starts_with("```") {
            in_code_block = !in_code_block;
            continue;
        }

        if in_code_block {
            result.push_str(line);
            result.push(' ');
            continue;
        }

        let cleaned = line
            .trim_start()
            .trim_start_matches('#')
            .trim_start_matches('-')
            .trim_start_matches('*')
            .trim_start_matches('>')
            .replace("**", "")
            .replace("__", "")
            .replace(['*', '_', '`'], "");

        result.push_str(&cleaned);
        result.push(' ');
    }

    result
}

/// Collapse every whitespace run to one space and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Text of the first level-one heading outside code fences.
pub fn extract_title(text: &str) -> Option<String> {
    let mut in_code_block = false;
    for line in text.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") {
            in_code_block = !in_code_block;
            continue;
        }
        if in_code_block {
            continue;
        }
        if let Some(title) = trimmed.strip_prefix("# ") {
            let title = title.trim();
            if !title.is_empty() {
                return Some(title.to_string());
            }
        }
    }
    None
}
