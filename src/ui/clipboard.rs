// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Copy buttons on code blocks.
//!
//! Clicking copies the block's text and flips the button to "Copied!" (or
//! "Failed" when the clipboard refuses) for two seconds. Each press stamps a
//! new generation on the button, and a revert timer only applies to the
//! generation it was created for. Two quick presses therefore revert two
//! seconds after the *second* one, not the first.

use std::time::Duration;

use maud::{html, Markup};

use crate::error::Result;

/// How long the success/failure indicator stays up.
pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);

/// System clipboard.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CopyIndicator {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl CopyIndicator {
    pub fn label(self) -> &'static str {
        match self {
            CopyIndicator::Idle => "Copy",
            CopyIndicator::Copied => "Copied!",
            CopyIndicator::Failed => "Failed",
        }
    }

    /// Extra class on the button besides `code-copy-button`.
    pub fn class(self) -> Option<&'static str> {
        match self {
            CopyIndicator::Idle => None,
            CopyIndicator::Copied => Some("success"),
            CopyIndicator::Failed => Some("error"),
        }
    }
}

/// A pending revert. Schedule `revert` after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevertTimer {
    /// Press counter; wraps, so only equality with the button's is meaningful.
    pub generation: u32,
    pub delay: Duration,
}

/// State of one copy button.
#[derive(Debug, Clone, Default)]
pub struct CopyButton {
    indicator: CopyIndicator,
    generation: u32,
}

impl CopyButton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indicator(&self) -> CopyIndicator {
        self.indicator
    }

    /// Copy `text` and show the outcome.
    pub fn copy(&mut self, clipboard: &mut impl Clipboard, text: &str) -> RevertTimer {
        let outcome = clipboard.write_text(text);
        self.record(outcome)
    }

    /// Show the outcome of a clipboard write the host performed itself.
    pub fn record(&mut self, outcome: Result<()>) -> RevertTimer {
        self.indicator = match outcome {
            Ok(()) => CopyIndicator::Copied,
            Err(e) => {
                tracing::warn!(error = %e, "copy to clipboard failed");
                CopyIndicator::Failed
            }
        };
        self.generation = self.generation.wrapping_add(1);
        RevertTimer {
            generation: self.generation,
            delay: COPY_FEEDBACK,
        }
    }

    /// Return to idle if no newer press happened since `timer` was issued.
    pub fn revert(&mut self, timer: RevertTimer) -> bool {
        if timer.generation != self.generation {
            return false;
        }
        self.indicator = CopyIndicator::Idle;
        true
    }

    /// Button markup for the current indicator.
    pub fn markup(&self) -> Markup {
        button_markup(self.indicator)
    }
}

/// Inner markup of the copy button in a given state.
pub fn button_markup(indicator: CopyIndicator) -> Markup {
    let class = match indicator.class() {
        Some(extra) => format!("code-copy-button {}", extra),
        None => "code-copy-button".to_string(),
    };
    html! {
        button class=(class) title="Copy code to clipboard" {
            (icon(indicator))
            span.copy-text { (indicator.label()) }
        }
    }
}

fn icon(indicator: CopyIndicator) -> Markup {
    let (class, path) = match indicator {
        CopyIndicator::Idle => (
            "copy-icon",
            "M4 2h8a2 2 0 0 1 2 2v8M4 6H2a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h6a2 2 0 0 0 2-2v-2",
        ),
        CopyIndicator::Copied => ("check-icon", "M3 8l3 3 7-7"),
        CopyIndicator::Failed => ("error-icon", "M8 1l7 14H1L8 1zM8 6v4M8 12v.5"),
    };
    html! {
        svg class=(class) width="16" height="16" viewBox="0 0 16 16" fill="none" {
            path d=(path) stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round" {}
        }
    }
}
