//! Names of the root attribute and storage key a controller uses.

pub const DEFAULT_ATTRIBUTE: &str = "data-theme";
pub const DEFAULT_STORAGE_KEY: &str = "mn-theme";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    /// Attribute on `<html>` that stylesheets select on.
    pub attribute: String,
    /// `localStorage` key holding the last applied theme.
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { attribute: DEFAULT_ATTRIBUTE.to_owned(), storage_key: DEFAULT_STORAGE_KEY.to_owned() }
    }
}

impl ThemeConfig {
    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = attribute.into();
        self
    }

    #[must_use]
    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
