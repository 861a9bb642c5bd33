// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-page search and small UI behaviours for static documentation sites.
//!
//! A static site has no server to query, so search runs in the page: the
//! site build writes every page as plain text into `search-index.json`, the
//! browser fetches it the first time the search modal opens, and each
//! keystroke is matched against it locally.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌───────────────┐     ┌───────────┐
//! │  build/     │────▶│ search-      │────▶│  loader.rs    │────▶│ search/   │
//! │ (markdown → │     │ index.json   │     │ (fetch once,  │     │ (match,   │
//! │  pages)     │     │              │     │  memoize)     │     │  preview) │
//! └─────────────┘     └──────────────┘     └───────────────┘     └───────────┘
//!                                                  │                   │
//!                                                  ▼                   ▼
//!                                          ┌─────────────────────────────────┐
//!                                          │ controller.rs  ──▶  render.rs   │
//!                                          │ (modal state machine, keyboard) │
//!                                          └─────────────────────────────────┘
//! ```
//!
//! The controller and the `ui` models are plain state machines: the host
//! (the `wasm` bindings in a browser, tests anywhere else) feeds them events
//! and performs the commands they return.
//!
//! # Usage
//!
//! ```ignore
//! use glean::{search, SearchIndex, SearchOutcome};
//!
//! let index = SearchIndex::from_json(&bytes)?;
//! if let SearchOutcome::Matches(results) = search(&index, "install") {
//!     for r in results {
//!         println!("{}: {}", r.title, r.preview);
//!     }
//! }
//! ```

// Module declarations
pub mod build;
pub mod controller;
mod error;
pub mod loader;
pub mod render;
pub mod search;
pub mod testing;
mod types;
pub mod ui;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use controller::{transition, Command, Event, KeyPress, KeyScope, ModalState, SearchController, Transition};
pub use error::{Error, Result};
pub use loader::{DirSource, FetchTicket, IndexLoader, IndexSource, LoadState, MemorySource};
#[cfg(feature = "http")]
pub use loader::HttpSource;
pub use render::{modal_display, render_results};
pub use search::{extract_preview, search, search_with, Fragment, Highlighter};
pub use types::{
    Page, SearchIndex, SearchOptions, SearchOutcome, SearchResult, CONTEXT_AFTER, CONTEXT_BEFORE,
    DEFAULT_INDEX_PATH, ELLIPSIS, FALLBACK_PREVIEW_LEN, MIN_QUERY_LEN,
};
