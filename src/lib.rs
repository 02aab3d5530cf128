//! # nes-theme
//!
//! Light/dark theme switching for a web page. The active theme lives in a
//! `data-theme` attribute on `<html>`; the last choice is saved to
//! `localStorage` and re-applied by `load_theme` on the next page load.
//!
//! The controller is generic over the root marker and the store, so it runs
//! natively against the in-memory backends. The `hydrate` feature adds the
//! `web-sys` backends and exports `window.masterNES` to JavaScript.

pub mod config;
pub mod controller;
pub mod store;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod bindings;
#[cfg(feature = "hydrate")]
pub mod browser;

pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use store::{MarkerError, MemoryMarker, MemoryStore, PreferenceStore, StorageError, ThemeMarker};
pub use theme::{InvalidThemeError, Theme};
