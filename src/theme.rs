//! Light/dark theme preference.
//!
//! A stored choice always wins over the system `prefers-color-scheme`; the
//! system preference is followed live only until the user toggles once.
//! Storage sits behind [`PreferenceStore`] so the browser's `localStorage`
//! can be swapped for [`MemoryStore`] when it is missing or refuses writes.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything but `light`/`dark` is ignored.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    #[must_use]
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
}

/// Startup resolution: valid stored value, then system preference, then light.
#[must_use]
pub fn resolve(stored: Option<&str>, system_dark: bool) -> Theme {
    stored.and_then(Theme::parse).unwrap_or_else(|| Theme::from_system(system_dark))
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("preference storage rejected the write: {0}")]
    Write(String),
}

/// Single-key preference persistence.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store; the fallback when the browser offers no storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

pub struct ThemeController<S> {
    store: S,
    key: String,
    theme: Theme,
    /// True once a valid value is stored (or the user toggled).
    explicit: bool,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Resolve the startup theme from `store` and the system preference.
    pub fn new(store: S, key: impl Into<String>, system_dark: bool) -> Self {
        let key = key.into();
        let stored = match store.get(&key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "theme preference unreadable, following system");
                None
            }
        };
        let explicit = stored.as_deref().and_then(Theme::parse).is_some();
        let theme = resolve(stored.as_deref(), system_dark);
        Self { store, key, theme, explicit }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn is_explicit(&self) -> bool {
        self.explicit
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Flip the resolved theme and persist it.
    ///
    /// A failed write still applies the new theme for this session.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.explicit = true;
        if let Err(e) = self.store.set(&self.key, self.theme.as_str()) {
            tracing::warn!(error = %e, "theme preference not persisted");
        }
        tracing::debug!(theme = self.theme.as_str(), "theme toggled");
        self.theme
    }

    /// System `prefers-color-scheme` changed. Returns the new theme when the
    /// applied theme changes.
    pub fn on_system_change(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.explicit {
            return None;
        }
        let next = Theme::from_system(prefers_dark);
        if next == self.theme {
            return None;
        }
        self.theme = next;
        Some(next)
    }
}
