//! Theme storage and application in the browser.
//!
//! [`LocalStore`] adapts `localStorage` to the core's `PreferenceStore`, and
//! [`apply`] writes the `data-theme` attribute on the `<html>` element.
//! Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! and native tests see an unavailable store and a light system theme.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use folio::theme::{PreferenceStore, StoreError, Theme};

#[cfg(feature = "hydrate")]
pub const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// `localStorage`, when the browser offers it.
#[derive(Clone, Debug, Default)]
pub struct LocalStore {
    #[cfg(feature = "hydrate")]
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
            if storage.is_none() {
                log::warn!("localStorage unavailable, theme choice lasts this visit only");
            }
            Self { storage }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
            storage.get_item(key).map_err(|_| StoreError::Unavailable)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StoreError::Write(e.as_string().unwrap_or_else(|| "setItem failed".to_owned())))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable)
        }
    }
}

/// Whether the system currently prefers a dark color scheme.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(root) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            crate::util::dom::apply_attr(&root, theme.root_attr());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
