//! The two page-wide resources a theme controller touches.
//!
//! DESIGN
//! ======
//! [`ThemeMarker`] is the attribute on the document root that stylesheets
//! select on. [`PreferenceStore`] is the origin-scoped key-value storage that
//! survives reloads. Both take `&self`; implementations own their interior
//! mutability, the same way the browser owns the real DOM and `localStorage`.
//!
//! The in-memory implementations back SSR/native builds and tests.

use std::cell::RefCell;
use std::collections::HashMap;

/// Failure reading or writing the persistent store.
///
/// Never surfaced past [`crate::controller::ThemeController`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No store exists in this context (private browsing, sandboxed frame).
    #[error("persistent storage is unavailable")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
    /// Quota exceeded, storage disabled, or similar.
    #[error("storage write failed: {0}")]
    Write(String),
}

/// The root marker could not be written (no document root, or the DOM threw).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("theme marker not set: {0}")]
pub struct MarkerError(pub String);

/// Root-element attribute holding the active theme.
pub trait ThemeMarker {
    /// Current attribute value, `None` if the attribute is absent.
    fn get(&self) -> Option<String>;

    /// Overwrite the attribute value.
    ///
    /// # Errors
    ///
    /// Returns a [`MarkerError`] when the attribute cannot be written.
    fn set(&self, value: &str) -> Result<(), MarkerError>;
}

/// Origin-scoped key-value storage.
pub trait PreferenceStore {
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns a [`StorageError`] when the store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Marker held in memory, starting absent.
#[derive(Debug, Default)]
pub struct MemoryMarker {
    value: RefCell<Option<String>>,
}

impl MemoryMarker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marker that starts with `value` already present.
    #[must_use]
    pub fn with_value(value: &str) -> Self {
        Self { value: RefCell::new(Some(value.to_owned())) }
    }

    /// Remove the attribute, as a fresh page load would.
    pub fn clear(&self) {
        self.value.borrow_mut().take();
    }
}

impl ThemeMarker for MemoryMarker {
    fn get(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn set(&self, value: &str) -> Result<(), MarkerError> {
        *self.value.borrow_mut() = Some(value.to_owned());
        Ok(())
    }
}

/// Key-value store held in memory. Never fails.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write an entry directly, bypassing any controller.
    pub fn insert(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.insert(key, value);
        Ok(())
    }
}

impl<T: ThemeMarker + ?Sized> ThemeMarker for &T {
    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn set(&self, value: &str) -> Result<(), MarkerError> {
        (**self).set(value)
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
