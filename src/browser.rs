//! `web-sys` backends: the `<html>` element and `window.localStorage`.
//!
//! Every lookup goes through `web_sys::window()` on each call, so a
//! controller built over these types holds no JS handles.

use wasm_bindgen::JsValue;

use crate::store::{MarkerError, PreferenceStore, StorageError, ThemeMarker};

/// Attribute on `document.documentElement`.
#[derive(Debug, Clone)]
pub struct DocumentRoot {
    attribute: String,
}

impl DocumentRoot {
    #[must_use]
    pub fn new(attribute: &str) -> Self {
        Self { attribute: attribute.to_owned() }
    }
}

fn root_element() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

impl ThemeMarker for DocumentRoot {
    fn get(&self) -> Option<String> {
        root_element()?.get_attribute(&self.attribute)
    }

    fn set(&self, value: &str) -> Result<(), MarkerError> {
        let el = root_element().ok_or_else(|| MarkerError("no document root".into()))?;
        el.set_attribute(&self.attribute, value)
            .map_err(|e| MarkerError(format!("{}: {}", self.attribute, describe(&e))))
    }
}

/// `window.localStorage`. Unavailable in some sandboxed and private contexts.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StorageError::Unavailable),
        // Accessing the property itself throws when storage is blocked.
        Err(e) => Err(StorageError::Read(describe(&e))),
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?.get_item(key).map_err(|e| StorageError::Read(describe(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?.set_item(key, value).map_err(|e| StorageError::Write(describe(&e)))
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
