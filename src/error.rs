// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type shared by the whole crate.
//!
//! Nothing here is fatal to a page. A failed fetch leaves the modal in its
//! loading state; a broken storage backend only stops remembering
//! preferences.

use std::path::PathBuf;

/// Everything that can go wrong in the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The index asset could not be retrieved.
    #[error("failed to fetch search index `{path}`: {reason}")]
    Fetch { path: String, reason: String },

    /// The index asset was retrieved but is not `{ "pages": [...] }`.
    #[error("malformed search index: {0}")]
    Malformed(String),

    /// The clipboard write was rejected (permissions, insecure context).
    #[error("clipboard write rejected: {0}")]
    Clipboard(String),

    /// Local storage refused a read or write.
    #[error("storage unavailable: {0}")]
    Storage(String),

    /// Filesystem failure while building or reading an index.
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether retrying the same index fetch could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Fetch { .. } | Error::Io { .. })
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_message() {
        let err = Error::Fetch {
            path: "search-index.json".to_string(),
            reason: "404".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to fetch search index `search-index.json`: 404"
        );
        assert!(err.is_retryable());
    }

    #[test]
    fn test_malformed_not_retryable() {
        assert!(!Error::Malformed("eof".to_string()).is_retryable());
    }
}
