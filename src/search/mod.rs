// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query matching: where the keystrokes meet the pages.
//!
//! A page matches when its title or content contains the query, ignoring
//! case. Results keep index order and carry no score, so a query lists pages
//! in the same order as the table of contents.

pub mod highlight;
mod matcher;
pub mod preview;
pub mod utils;

pub use highlight::{Fragment, Highlighter};
pub use matcher::{page_matches, search, search_with, shows_hint};
pub use preview::extract_preview;
