// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Light/dark theme switcher.
//!
//! The page supplies a default theme (a `<meta>` tag written by the site
//! build); a choice the reader made earlier wins over it. The chosen name
//! becomes the `data-theme` attribute of the document element and is kept
//! in storage under [`THEME_KEY`].

use super::{read_or_none, write_or_log, Storage};

pub const THEME_KEY: &str = "glean-theme";

/// Used when the page does not say otherwise.
pub const DEFAULT_THEME: &str = "light";

#[derive(Debug, Clone)]
pub struct ThemeSwitcher {
    default_theme: String,
    current: String,
    menu_open: bool,
}

impl Default for ThemeSwitcher {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ThemeSwitcher {
    /// `page_default` is the content of the page's theme meta tag, if any.
    pub fn new(page_default: Option<&str>) -> Self {
        let default_theme = page_default
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_THEME)
            .to_string();
        Self {
            current: default_theme.clone(),
            default_theme,
            menu_open: false,
        }
    }

    pub fn default_theme(&self) -> &str {
        &self.default_theme
    }

    /// Theme to put on `data-theme`.
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Whether the option button for `theme` gets the `active` class.
    pub fn is_active(&self, theme: &str) -> bool {
        self.current == theme
    }

    /// Resolve the starting theme and persist it.
    pub fn init(&mut self, storage: &mut impl Storage) -> &str {
        let theme = read_or_none(storage, THEME_KEY)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| self.default_theme.clone());
        self.apply(storage, theme);
        &self.current
    }

    /// An option was clicked: apply, persist, close the menu.
    pub fn select(&mut self, storage: &mut impl Storage, theme: &str) -> &str {
        self.apply(storage, theme.to_string());
        self.menu_open = false;
        &self.current
    }

    /// The theme button was clicked.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Any click on the document. Clicks outside the switcher close the menu.
    pub fn on_document_click(&mut self, inside_switcher: bool) {
        if !inside_switcher {
            self.menu_open = false;
        }
    }

    fn apply(&mut self, storage: &mut impl Storage, theme: String) {
        write_or_log(storage, THEME_KEY, &theme);
        self.current = theme;
    }
}
