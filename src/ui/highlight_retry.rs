// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One delayed re-run of the syntax highlighter.
//!
//! The highlighter script can initialise after the code blocks are already
//! on screen. After the page's `load` event we wait a fixed 100 ms and ask
//! it to highlight everything once more. One shot, no retries.

use std::time::Duration;

pub const HIGHLIGHT_RETRY_DELAY: Duration = Duration::from_millis(100);

/// The page's syntax highlighter (Prism, highlight.js, ...).
pub trait SyntaxHighlighter {
    /// Whether the highlighter script actually loaded.
    fn is_available(&self) -> bool;
    fn highlight_all(&mut self);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HighlightRetry {
    scheduled: bool,
    fired: bool,
}

impl HighlightRetry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page finished loading. Returns the delay to wait, the first time only.
    pub fn on_page_load(&mut self) -> Option<Duration> {
        if self.scheduled {
            return None;
        }
        self.scheduled = true;
        Some(HIGHLIGHT_RETRY_DELAY)
    }

    /// Timer elapsed. Returns whether highlighting ran.
    pub fn fire(&mut self, highlighter: &mut impl SyntaxHighlighter) -> bool {
        if !self.scheduled || self.fired {
            return false;
        }
        self.fired = true;
        if !highlighter.is_available() {
            tracing::debug!("syntax highlighter not loaded; skipping retry");
            return false;
        }
        highlighter.highlight_all();
        true
    }
}
