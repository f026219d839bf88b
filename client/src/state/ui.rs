//! Page chrome state: theme, mobile menu, active section.
//!
//! DESIGN
//! ======
//! Provided once as `RwSignal<UiState>` by the root component. The theme
//! field is only ever written with the result of `PreferenceStore::load`
//! (once, on mount) or `PreferenceStore::toggle`.
//!
//! The page's callbacks are thin wrappers over the methods here, so the
//! load/toggle/navigate actions run the same way in tests as in the browser.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::scroll::{NavTarget, Section, SectionAnchors, resolve_section};
use crate::util::storage::PreferenceStorage;
use crate::util::theme::{PreferenceStore, Theme};

/// UI state for the navbar and page shell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub menu_open: bool,
    pub active_section: Section,
}

impl UiState {
    /// Record a navigation to `section` and collapse the mobile menu.
    pub fn navigated(&mut self, section: Section) {
        self.active_section = section;
        self.menu_open = false;
    }

    /// Navigate to `section` given the anchors measured just now.
    ///
    /// The menu closes and the section is recorded even when no scroll
    /// target can be resolved.
    pub fn navigate(&mut self, section: Section, anchors: &SectionAnchors) -> Option<NavTarget> {
        self.navigated(section);
        resolve_section(section, anchors)
    }

    /// Publish the persisted theme. One storage read.
    pub fn load_theme<S: PreferenceStorage>(&mut self, store: &PreferenceStore<S>) -> Theme {
        self.theme = store.load();
        self.theme
    }

    /// Flip and persist the theme. One storage write.
    pub fn toggle_theme<S: PreferenceStorage>(&mut self, store: &PreferenceStore<S>) -> Theme {
        self.theme = store.toggle(self.theme);
        self.theme
    }
}
