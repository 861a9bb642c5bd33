// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The small page scripts that sit next to search.
//!
//! Each one is independent: a page without a copy button or theme menu just
//! never constructs the corresponding model. Persistence goes through
//! [`Storage`], the shape of `window.localStorage`, so every model runs the
//! same against the browser or an in-memory map.

pub mod clipboard;
pub mod highlight_retry;
pub mod sidebar;
pub mod theme;

use std::collections::HashMap;

use crate::error::Result;

pub use clipboard::{Clipboard, CopyButton, CopyIndicator, RevertTimer, COPY_FEEDBACK};
pub use highlight_retry::{HighlightRetry, SyntaxHighlighter, HIGHLIGHT_RETRY_DELAY};
pub use sidebar::{SidebarToggle, SIDEBAR_KEY};
pub use theme::{ThemeSwitcher, DEFAULT_THEME, THEME_KEY};

/// Page-scoped string storage.
///
/// Both calls can fail (storage disabled, quota exceeded); callers treat
/// that as "preference not remembered", never as a page error.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// `Storage` backed by a map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read a key, logging and swallowing storage failures.
pub(crate) fn read_or_none(storage: &impl Storage, key: &str) -> Option<String> {
    storage.get(key).unwrap_or_else(|e| {
        tracing::warn!(key, error = %e, "storage read failed");
        None
    })
}

/// Write a key, logging and swallowing storage failures.
pub(crate) fn write_or_log(storage: &mut impl Storage, key: &str, value: &str) {
    if let Err(e) = storage.set(key, value) {
        tracing::warn!(key, error = %e, "storage write failed");
    }
}
