// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Generate `search-index.json` from a directory of Markdown pages.
//!
//! This is the site-build half of search: walk the sources, turn each page
//! into plain text, and write one JSON document the browser can fetch. Page
//! order in the index is sorted path order, which is also the order results
//! appear in.

pub mod document;
pub mod markdown;
pub mod parallel;

use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{Error, Result};
use crate::types::{Page, SearchIndex, DEFAULT_INDEX_PATH};

pub use document::{discover_sources, page_from_text, page_url, SourceFile};
pub use markdown::{extract_title, normalize_whitespace, strip_markdown};
pub use parallel::load_pages;

/// What a build produced.
#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub pages: usize,
    pub bytes: usize,
    pub output: PathBuf,
}

/// Create a progress style for the loading bar
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━╸")
}

/// Build the index for every `*.md` under `input_dir` into `output_dir`.
pub fn run_build(input_dir: &Path, output_dir: &Path) -> Result<BuildSummary> {
    let sources = discover_sources(input_dir)?;
    tracing::info!(count = sources.len(), input = %input_dir.display(), "discovered pages");

    #[cfg(feature = "parallel")]
    let pages = {
        let pb = ProgressBar::new(sources.len() as u64);
        pb.set_style(create_progress_style());
        pb.set_prefix("Loading");
        pb.set_message("pages...");
        let pages = parallel::load_pages_with_progress(&sources, &pb)?;
        pb.finish_with_message(format!("loaded {} pages", pages.len()));
        pages
    };

    #[cfg(not(feature = "parallel"))]
    let pages = load_pages(&sources)?;

    if pages.is_empty() {
        tracing::warn!(input = %input_dir.display(), "no markdown pages found; writing empty index");
    }

    let index = SearchIndex::new(pages);
    let output = write_index(&index, output_dir)?;
    let bytes = fs::metadata(&output).map_err(|e| Error::io(&output, e))?.len() as usize;

    Ok(BuildSummary {
        pages: index.len(),
        bytes,
        output,
    })
}

/// Every page under `input_dir`, in sorted path order.
pub fn collect_pages(input_dir: &Path) -> Result<Vec<Page>> {
    load_pages(&discover_sources(input_dir)?)
}

/// Write `index` as pretty JSON to `output_dir/search-index.json`.
pub fn write_index(index: &SearchIndex, output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|e| Error::io(output_dir, e))?;
    let path = output_dir.join(DEFAULT_INDEX_PATH);
    let json = index.to_json_pretty()?;
    fs::write(&path, json).map_err(|e| Error::io(&path, e))?;
    tracing::info!(pages = index.len(), path = %path.display(), "wrote search index");
    Ok(path)
}

/// Largest page by content length, for build reports.
pub fn largest_page(index: &SearchIndex) -> Option<&Page> {
    index.pages.iter().max_by_key(|p| p.content.len())
}

pub fn format_bytes(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}
