// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Load-once access to the search index.
//!
//! The index is fetched at most once per page view and kept until the page
//! goes away. The loader is a small explicit state machine instead of a
//! cached global that some callback happens to fill in:
//!
//! ```text
//!            begin()                complete(Ok)
//! NotStarted ───────▶ InFlight ─────────────────▶ Ready
//!     ▲                  │
//!     │                  │ complete(Err)
//!     │                  ▼
//!     └─── begin() ── Failed
//! ```
//!
//! The loader never does I/O itself. `begin()` hands out a [`FetchTicket`]
//! and the host (JavaScript `fetch`, a file read, an HTTP client) reports
//! back through `complete()`. While a ticket is outstanding no second one is
//! issued, so any number of keystrokes during the fetch cost one request.
//! Failures cache nothing: the next `begin()` tries again.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::types::{SearchIndex, DEFAULT_INDEX_PATH};

/// Where the loader is in its lifecycle.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    NotStarted,
    InFlight,
    Ready(Arc<SearchIndex>),
    /// Last attempt failed. Nothing is cached.
    Failed(String),
}

/// Permission to fetch the index once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    /// Relative path of the index asset.
    pub path: String,
    /// 1 for the first attempt, counting up after failures.
    pub attempt: u32,
}

/// Memoized index loader.
#[derive(Debug, Clone)]
pub struct IndexLoader {
    path: String,
    state: LoadState,
    attempts: u32,
}

impl Default for IndexLoader {
    fn default() -> Self {
        Self::new(DEFAULT_INDEX_PATH)
    }
}

impl IndexLoader {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            state: LoadState::NotStarted,
            attempts: 0,
        }
    }

    /// Loader that starts out with an index already in memory.
    pub fn preloaded(index: SearchIndex) -> Self {
        Self {
            path: DEFAULT_INDEX_PATH.to_string(),
            state: LoadState::Ready(Arc::new(index)),
            attempts: 0,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// The cached index, if loading has finished.
    pub fn index(&self) -> Option<&Arc<SearchIndex>> {
        match &self.state {
            LoadState::Ready(index) => Some(index),
            _ => None,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.state, LoadState::InFlight)
    }

    /// Start a fetch unless one is running or the index is already cached.
    pub fn begin(&mut self) -> Option<FetchTicket> {
        match self.state {
            LoadState::NotStarted | LoadState::Failed(_) => {
                self.attempts += 1;
                self.state = LoadState::InFlight;
                tracing::debug!(path = %self.path, attempt = self.attempts, "fetching search index");
                Some(FetchTicket {
                    path: self.path.clone(),
                    attempt: self.attempts,
                })
            }
            LoadState::InFlight | LoadState::Ready(_) => None,
        }
    }

    /// Report the outcome of a fetch.
    ///
    /// A response that arrives after the index is already cached (a
    /// duplicate fetch) is dropped and the cached index returned.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        response: Result<Vec<u8>>,
    ) -> Result<Arc<SearchIndex>> {
        if let LoadState::Ready(index) = &self.state {
            tracing::debug!(attempt = ticket.attempt, "index already cached; dropping response");
            return Ok(Arc::clone(index));
        }

        match response.and_then(|bytes| SearchIndex::from_json(&bytes)) {
            Ok(index) => {
                tracing::debug!(pages = index.len(), attempt = ticket.attempt, "search index ready");
                let index = Arc::new(index);
                self.state = LoadState::Ready(Arc::clone(&index));
                Ok(index)
            }
            Err(e) => {
                tracing::warn!(path = %ticket.path, attempt = ticket.attempt, error = %e, "failed to load search index");
                self.state = LoadState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Drive a full load against a synchronous source.
    ///
    /// Returns the cached index without touching the source when ready.
    pub fn load_from(&mut self, source: &impl IndexSource) -> Result<Arc<SearchIndex>> {
        if let Some(index) = self.index() {
            return Ok(Arc::clone(index));
        }
        let Some(ticket) = self.begin() else {
            return Err(Error::Fetch {
                path: self.path.clone(),
                reason: "fetch already in flight".to_string(),
            });
        };
        let response = source.fetch(&ticket.path);
        self.complete(&ticket, response)
    }
}

/// Something that can produce the raw bytes of the index asset.
pub trait IndexSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>>;
}

/// Built site on disk; `path` is resolved against the site root.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl IndexSource for DirSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        let full = self.root.join(path);
        fs::read(&full).map_err(|e| Error::Fetch {
            path: full.display().to_string(),
            reason: e.to_string(),
        })
    }
}

/// Index bytes already in memory.
#[derive(Debug, Clone)]
pub struct MemorySource(pub Vec<u8>);

impl IndexSource for MemorySource {
    fn fetch(&self, _path: &str) -> Result<Vec<u8>> {
        Ok(self.0.clone())
    }
}

#[cfg(feature = "http")]
pub use http::HttpSource;

#[cfg(feature = "http")]
mod http {
    use super::{Error, Result};
    use url::Url;

    /// Published site reachable over HTTP(S).
    #[derive(Debug, Clone)]
    pub struct HttpSource {
        client: reqwest::Client,
        base: Url,
    }

    impl HttpSource {
        /// `base` is the page URL the index path is relative to.
        pub fn new(base: &str) -> Result<Self> {
            let mut base = Url::parse(base).map_err(|e| Error::Fetch {
                path: base.to_string(),
                reason: e.to_string(),
            })?;
            // "https://host/docs" should resolve like the directory "docs/".
            if !base.path().ends_with('/') {
                let path = format!("{}/", base.path());
                base.set_path(&path);
            }
            let client = reqwest::Client::builder()
                .user_agent(concat!("glean/", env!("CARGO_PKG_VERSION")))
                .build()
                .map_err(|e| Error::Fetch {
                    path: base.to_string(),
                    reason: e.to_string(),
                })?;
            Ok(Self { client, base })
        }

        pub fn resolve(&self, path: &str) -> Result<Url> {
            self.base.join(path).map_err(|e| Error::Fetch {
                path: path.to_string(),
                reason: e.to_string(),
            })
        }

        /// GET the index asset. No timeout and no retry: a stalled server
        /// leaves the caller waiting, like the browser would.
        pub async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
            let url = self.resolve(path)?;
            let fetch_err = |reason: String| Error::Fetch {
                path: url.to_string(),
                reason,
            };

            let resp = self
                .client
                .get(url.clone())
                .send()
                .await
                .map_err(|e| fetch_err(e.to_string()))?;

            let status = resp.status();
            if !status.is_success() {
                return Err(fetch_err(format!("status {}", status)));
            }

            let bytes = resp.bytes().await.map_err(|e| fetch_err(e.to_string()))?;
            Ok(bytes.to_vec())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_resolve_relative_to_directory() {
            let source = HttpSource::new("https://example.com/docs").unwrap();
            assert_eq!(
                source.resolve("search-index.json").unwrap().as_str(),
                "https://example.com/docs/search-index.json"
            );
        }

        #[test]
        fn test_invalid_base() {
            assert!(HttpSource::new("not a url").is_err());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::index_json;
    use std::cell::Cell;

    struct CountingSource {
        calls: Cell<u32>,
        bytes: Vec<u8>,
    }

    impl IndexSource for CountingSource {
        fn fetch(&self, _path: &str) -> Result<Vec<u8>> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.bytes.clone())
        }
    }

    #[test]
    fn test_begin_once_while_in_flight() {
        let mut loader = IndexLoader::default();
        let ticket = loader.begin().unwrap();
        assert_eq!(ticket.path, "search-index.json");
        assert_eq!(ticket.attempt, 1);
        assert!(loader.begin().is_none());
        assert!(loader.begin().is_none());
        assert!(loader.is_in_flight());
    }

    #[test]
    fn test_complete_caches() {
        let mut loader = IndexLoader::default();
        let ticket = loader.begin().unwrap();
        let index = loader
            .complete(&ticket, Ok(index_json(&[("A", "alpha")])))
            .unwrap();
        assert_eq!(index.len(), 1);
        assert!(loader.index().is_some());
        assert!(loader.begin().is_none());
    }

    #[test]
    fn test_failure_caches_nothing_and_allows_retry() {
        let mut loader = IndexLoader::default();
        let ticket = loader.begin().unwrap();
        let err = loader
            .complete(
                &ticket,
                Err(Error::Fetch {
                    path: ticket.path.clone(),
                    reason: "offline".to_string(),
                }),
            )
            .unwrap_err();
        assert!(err.is_retryable());
        assert!(matches!(loader.state(), LoadState::Failed(_)));
        assert!(loader.index().is_none());

        let retry = loader.begin().unwrap();
        assert_eq!(retry.attempt, 2);
    }

    #[test]
    fn test_malformed_json_fails() {
        let mut loader = IndexLoader::default();
        let ticket = loader.begin().unwrap();
        let err = loader.complete(&ticket, Ok(b"<html>".to_vec())).unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));
        assert!(loader.index().is_none());
    }

    #[test]
    fn test_late_duplicate_response_ignored() {
        let mut loader = IndexLoader::default();
        let ticket = loader.begin().unwrap();
        loader
            .complete(&ticket, Ok(index_json(&[("First", "one")])))
            .unwrap();
        let index = loader
            .complete(&ticket, Ok(index_json(&[("Second", "two")])))
            .unwrap();
        assert_eq!(index.pages[0].title, "First");
    }

    #[test]
    fn test_load_from_memoizes() {
        let source = CountingSource {
            calls: Cell::new(0),
            bytes: index_json(&[("A", "alpha"), ("B", "beta")]),
        };
        let mut loader = IndexLoader::default();
        assert_eq!(loader.load_from(&source).unwrap().len(), 2);
        assert_eq!(loader.load_from(&source).unwrap().len(), 2);
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn test_dir_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut loader = IndexLoader::default();
        let err = loader.load_from(&DirSource::new(dir.path())).unwrap_err();
        assert!(matches!(err, Error::Fetch { .. }));
    }

    #[test]
    fn test_dir_source_reads_index() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("search-index.json"),
            index_json(&[("A", "alpha")]),
        )
        .unwrap();
        let mut loader = IndexLoader::default();
        let index = loader.load_from(&DirSource::new(dir.path())).unwrap();
        assert_eq!(index.pages[0].content, "alpha");
    }

    #[test]
    fn test_preloaded_is_ready() {
        let loader = IndexLoader::preloaded(SearchIndex::default());
        assert!(loader.index().is_some());
    }
}
