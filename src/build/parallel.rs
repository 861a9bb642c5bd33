// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel page loading.
//!
//! Reading and stripping pages is embarrassingly parallel. Rayon's indexed
//! `collect` keeps input order, so the index comes out in sorted path order
//! no matter which thread finished first.

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::SourceFile;
use crate::error::Result;
use crate::types::Page;

/// Load every source, failing on the first unreadable file.
#[cfg(feature = "parallel")]
pub fn load_pages(sources: &[SourceFile]) -> Result<Vec<Page>> {
    sources.par_iter().map(SourceFile::load).collect()
}

#[cfg(not(feature = "parallel"))]
pub fn load_pages(sources: &[SourceFile]) -> Result<Vec<Page>> {
    sources.iter().map(SourceFile::load).collect()
}

/// Same as [`load_pages`], ticking `progress` once per page.
#[cfg(feature = "parallel")]
pub fn load_pages_with_progress(sources: &[SourceFile], progress: &ProgressBar) -> Result<Vec<Page>> {
    sources
        .par_iter()
        .map(|source| {
            let page = source.load();
            progress.inc(1);
            page
        })
        .collect()
}
