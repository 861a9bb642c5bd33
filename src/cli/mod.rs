// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the glean command-line interface.
//!
//! - `index`: write `search-index.json` for a directory of Markdown pages
//! - `inspect`: summarise an index file
//! - `search`: query a built site (local directory or published URL) the
//!   way the browser would

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use glean::{CONTEXT_AFTER, CONTEXT_BEFORE, DEFAULT_INDEX_PATH, FALLBACK_PREVIEW_LEN, MIN_QUERY_LEN};

#[derive(Parser)]
#[command(name = "glean", about = "In-page search for static documentation sites", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build search-index.json from a directory of Markdown pages
    Index {
        /// Directory containing the Markdown sources
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory (the built site root)
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Summarise a search-index.json file
    Inspect {
        /// Path to search-index.json
        file: PathBuf,
    },

    /// Search a built site and display results
    Search {
        /// Site root directory, or an http(s):// URL of the published site
        site: String,

        /// Search query
        query: String,

        /// Maximum number of results to display
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Index path relative to the site root
        #[arg(long, default_value = DEFAULT_INDEX_PATH)]
        index_path: String,

        /// Shortest query that is searched
        #[arg(long, default_value_t = MIN_QUERY_LEN)]
        min_query_len: usize,

        /// Characters of context before the first match
        #[arg(long, default_value_t = CONTEXT_BEFORE)]
        context_before: usize,

        /// Characters of context after the first match
        #[arg(long, default_value_t = CONTEXT_AFTER)]
        context_after: usize,

        /// Preview length for title-only matches
        #[arg(long, default_value_t = FALLBACK_PREVIEW_LEN)]
        fallback_len: usize,
    },
}
