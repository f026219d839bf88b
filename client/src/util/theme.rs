//! Light/dark theme preference.
//!
//! The preference lives under one `localStorage` key. It is read once when
//! the page mounts and written once per toggle. Nothing stored, or `"light"`,
//! resolves to `Light`; any other value resolves to `Dark`.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. A failed read falls back to `Light`; a failed
//! write is logged and the in-memory theme still flips. Losing the preference
//! is cosmetic, so no error ever reaches the page.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use super::storage::{BrowserStorage, PreferenceStorage};

/// `localStorage` key holding the persisted theme.
pub const STORAGE_KEY: &str = "themeValue";

/// Visual mode of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stored and `data-theme` representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Resolve a raw persisted value.
    ///
    /// Missing, empty, or exactly `"light"` gives `Light`. Every other value,
    /// including unexpected ones like `"blue"` or `"LIGHT"`, gives `Dark`.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            None | Some("" | "light") => Self::Light,
            Some(_) => Self::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owns the persisted preference and its load/toggle rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct PreferenceStore<S = BrowserStorage> {
    storage: S,
}

impl PreferenceStore<BrowserStorage> {
    /// Store backed by `window.localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: PreferenceStorage> PreferenceStore<S> {
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the persisted theme. Performs exactly one storage read.
    pub fn load(&self) -> Theme {
        match self.storage.read(STORAGE_KEY) {
            Ok(raw) => Theme::from_stored(raw.as_deref()),
            Err(e) => {
                log::debug!("theme preference unreadable, using default: {e}");
                Theme::default()
            }
        }
    }

    /// Flip `current`, persist the result, and return it.
    ///
    /// Performs exactly one storage write. A write failure leaves the
    /// returned theme unchanged.
    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.toggled();
        if let Err(e) = self.storage.write(STORAGE_KEY, next.as_str()) {
            log::warn!("theme preference not persisted ({next}): {e}");
        }
        next
    }
}
