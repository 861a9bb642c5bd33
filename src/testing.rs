// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Page, SearchIndex};

/// Create a page whose URL is derived from its title.
///
/// This is the canonical implementation used across all tests.
pub fn make_page(title: &str, content: &str) -> Page {
    Page {
        title: title.to_string(),
        url: format!("/{}.html", title.to_lowercase().replace(' ', "-")),
        content: content.to_string(),
    }
}

/// Create an index from `(title, content)` pairs.
pub fn make_index(pages: &[(&str, &str)]) -> SearchIndex {
    SearchIndex::new(
        pages
            .iter()
            .map(|(title, content)| make_page(title, content))
            .collect(),
    )
}

/// Serialize `(title, content)` pairs the way the site build emits them.
pub fn index_json(pages: &[(&str, &str)]) -> Vec<u8> {
    serde_json::to_vec(&make_index(pages)).unwrap_or_default()
}

/// A small documentation site used by integration tests.
pub fn sample_index() -> SearchIndex {
    make_index(&[
        (
            "Introduction",
            "Welcome to the handbook. This guide covers installation, configuration and deployment.",
        ),
        (
            "Installation",
            "Install the toolchain with the package manager, then verify the version.",
        ),
        (
            "Configuration",
            "Settings live in a TOML file. Each key maps to a command-line flag of the same name.",
        ),
        (
            "Deployment",
            "Build the site, upload the output directory, and point your server at index.html.",
        ),
        (
            "C++ Interop",
            "Calling into C++ requires an extern block. Templates from c++ headers are not supported.",
        ),
    ])
}
