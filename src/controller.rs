//! Set, toggle, and reload the page theme.
//!
//! The root marker is authoritative. Persistence is best-effort: every
//! storage failure is logged and dropped so theming keeps working where
//! `localStorage` is blocked. Validation errors are never dropped.

use crate::config::DEFAULT_STORAGE_KEY;
use crate::store::{PreferenceStore, ThemeMarker};
use crate::theme::{InvalidThemeError, Theme};

pub struct ThemeController<M, S> {
    marker: M,
    store: S,
    storage_key: String,
}

impl<M: ThemeMarker, S: PreferenceStore> ThemeController<M, S> {
    /// Controller using the default storage key.
    pub fn new(marker: M, store: S) -> Self {
        Self::with_storage_key(marker, store, DEFAULT_STORAGE_KEY)
    }

    /// Controller persisting under `storage_key`. The attribute name, if
    /// configurable, belongs to the marker implementation.
    pub fn with_storage_key(marker: M, store: S, storage_key: impl Into<String>) -> Self {
        Self { marker, store, storage_key: storage_key.into() }
    }

    /// Validate `theme`, apply it to the root marker, then try to persist it.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidThemeError`] unless `theme` is exactly `"light"` or
    /// `"dark"`. The marker is not touched in that case.
    pub fn set_theme(&self, theme: &str) -> Result<(), InvalidThemeError> {
        let theme: Theme = theme.parse()?;
        self.set(theme);
        Ok(())
    }

    /// Apply an already-validated theme.
    ///
    /// Nothing is persisted when the marker cannot be written, so storage
    /// never holds a theme the page is not showing.
    pub fn set(&self, theme: Theme) {
        if let Err(e) = self.marker.set(theme.as_str()) {
            log::warn!("theme: {theme} not applied: {e}");
            return;
        }
        log::debug!("theme: applied {theme}");

        if let Err(e) = self.store.set(&self.storage_key, theme.as_str()) {
            log::warn!("theme: preference not persisted: {e}");
        }
    }

    /// Flip the marker between light and dark and return the new theme.
    ///
    /// An absent or empty marker counts as light. Any value other than
    /// `"light"` flips to light.
    pub fn toggle_theme(&self) -> Theme {
        let current = match self.marker.get().as_deref() {
            None | Some("" | "light") => Theme::Light,
            Some(_) => Theme::Dark,
        };
        let next = current.toggled();
        self.set(next);
        next
    }

    /// Re-apply the persisted preference, if any.
    ///
    /// A missing entry or an unreadable store is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidThemeError`] when the stored value is neither
    /// `"light"` nor `"dark"`.
    pub fn load_theme(&self) -> Result<(), InvalidThemeError> {
        let saved = match self.store.get(&self.storage_key) {
            Ok(saved) => saved,
            Err(e) => {
                log::debug!("theme: saved preference unreadable: {e}");
                return Ok(());
            }
        };

        match saved.as_deref() {
            None | Some("") => Ok(()),
            Some(value) => self.set_theme(value),
        }
    }

    /// Theme currently on the marker, `None` if absent or unrecognized.
    #[must_use]
    pub fn current(&self) -> Option<Theme> {
        self.marker.get()?.parse().ok()
    }

    #[must_use]
    pub fn marker(&self) -> &M {
        &self.marker
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
