// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Collapsible table-of-contents sidebar.
//!
//! Hidden state is the `sidebar-hidden` class on `<body>`, remembered across
//! page loads as the string `"true"` or `"false"`.

use super::{read_or_none, write_or_log, Storage};

pub const SIDEBAR_KEY: &str = "glean-sidebar-hidden";

/// Body class applied while the sidebar is hidden.
pub const HIDDEN_CLASS: &str = "sidebar-hidden";

#[derive(Debug, Clone, Copy, Default)]
pub struct SidebarToggle {
    hidden: bool,
}

impl SidebarToggle {
    /// Restore the remembered state. Anything but `"true"` means visible.
    pub fn init(storage: &impl Storage) -> Self {
        let hidden = read_or_none(storage, SIDEBAR_KEY).as_deref() == Some("true");
        Self { hidden }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Flip and persist visibility. Returns the new hidden flag.
    pub fn toggle(&mut self, storage: &mut impl Storage) -> bool {
        self.hidden = !self.hidden;
        write_or_log(storage, SIDEBAR_KEY, if self.hidden { "true" } else { "false" });
        self.hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MemoryStorage;

    #[test]
    fn test_default_visible() {
        assert!(!SidebarToggle::init(&MemoryStorage::new()).is_hidden());
    }

    #[test]
    fn test_toggle_persists() {
        let mut storage = MemoryStorage::new();
        let mut sidebar = SidebarToggle::init(&storage);
        assert!(sidebar.toggle(&mut storage));
        assert!(SidebarToggle::init(&storage).is_hidden());
        assert!(!sidebar.toggle(&mut storage));
        assert_eq!(storage.get(SIDEBAR_KEY).unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn test_garbage_value_is_visible() {
        let mut storage = MemoryStorage::new();
        storage.set(SIDEBAR_KEY, "yes").unwrap();
        assert!(!SidebarToggle::init(&storage).is_hidden());
    }
}
