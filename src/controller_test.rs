use std::cell::Cell;

use super::*;
use crate::config::DEFAULT_STORAGE_KEY;
use crate::store::{MarkerError, MemoryMarker, MemoryStore, StorageError};

/// Store that fails every call, like `localStorage` in a sandboxed frame.
#[derive(Default)]
struct FailingStore {
    calls: Cell<usize>,
}

impl PreferenceStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        self.calls.set(self.calls.get() + 1);
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        self.calls.set(self.calls.get() + 1);
        Err(StorageError::Write("quota exceeded".into()))
    }
}

/// Marker whose document root is missing.
struct DetachedMarker;

impl ThemeMarker for DetachedMarker {
    fn get(&self) -> Option<String> {
        None
    }

    fn set(&self, _value: &str) -> Result<(), MarkerError> {
        Err(MarkerError("no document root".into()))
    }
}

fn controller() -> ThemeController<MemoryMarker, MemoryStore> {
    ThemeController::new(MemoryMarker::new(), MemoryStore::new())
}

fn stored(ctl: &ThemeController<MemoryMarker, MemoryStore>) -> Option<String> {
    ctl.store().get(DEFAULT_STORAGE_KEY).expect("memory store")
}

// =============================================================
// set_theme
// =============================================================

#[test]
fn set_theme_updates_marker_and_store() {
    for theme in ["light", "dark"] {
        let ctl = controller();
        ctl.set_theme(theme).expect("valid theme");
        assert_eq!(ctl.marker().get().as_deref(), Some(theme));
        assert_eq!(stored(&ctl).as_deref(), Some(theme));
    }
}

#[test]
fn set_theme_rejects_invalid_and_leaves_marker_unchanged() {
    let ctl = controller();
    ctl.set_theme("dark").expect("valid theme");

    for bad in ["", "Dark", "blue", "light "] {
        let err = ctl.set_theme(bad).unwrap_err();
        assert_eq!(err.value, bad);
        assert_eq!(ctl.marker().get().as_deref(), Some("dark"));
        assert_eq!(stored(&ctl).as_deref(), Some("dark"));
    }
}

#[test]
fn set_theme_rejects_invalid_on_absent_marker() {
    let ctl = controller();
    assert!(ctl.set_theme("").is_err());
    assert_eq!(ctl.marker().get(), None);
    assert!(ctl.store().is_empty());
}

#[test]
fn set_theme_twice_is_idempotent() {
    let ctl = controller();
    ctl.set_theme("dark").expect("first");
    ctl.set_theme("dark").expect("second");
    assert_eq!(ctl.marker().get().as_deref(), Some("dark"));
    assert_eq!(stored(&ctl).as_deref(), Some("dark"));
    assert_eq!(ctl.store().len(), 1);
}

#[test]
fn last_write_wins() {
    let ctl = controller();
    ctl.set_theme("dark").expect("dark");
    ctl.set_theme("light").expect("light");
    assert_eq!(ctl.current(), Some(Theme::Light));
    assert_eq!(stored(&ctl).as_deref(), Some("light"));
}

#[test]
fn custom_storage_key_is_used() {
    let ctl = ThemeController::with_storage_key(MemoryMarker::new(), MemoryStore::new(), "site-theme");
    ctl.set_theme("dark").expect("dark");
    assert_eq!(ctl.store().get("site-theme").expect("memory").as_deref(), Some("dark"));
    assert_eq!(ctl.store().get(DEFAULT_STORAGE_KEY).expect("memory"), None);
}

#[test]
fn set_theme_skips_persistence_when_marker_fails() {
    let ctl = ThemeController::new(DetachedMarker, MemoryStore::new());
    ctl.set_theme("dark").expect("marker errors are not validation errors");
    assert!(ctl.store().is_empty());
}

#[test]
fn toggle_skips_persistence_when_marker_fails() {
    let ctl = ThemeController::new(DetachedMarker, MemoryStore::new());
    assert_eq!(ctl.toggle_theme(), Theme::Dark);
    assert!(ctl.store().is_empty());
}

// =============================================================
// toggle_theme
// =============================================================

#[test]
fn toggle_from_absent_marker_gives_dark() {
    let ctl = controller();
    assert_eq!(ctl.toggle_theme(), Theme::Dark);
    assert_eq!(ctl.marker().get().as_deref(), Some("dark"));
    assert_eq!(stored(&ctl).as_deref(), Some("dark"));
}

#[test]
fn toggle_from_empty_marker_gives_dark() {
    let ctl = ThemeController::new(MemoryMarker::with_value(""), MemoryStore::new());
    assert_eq!(ctl.toggle_theme(), Theme::Dark);
}

#[test]
fn toggle_twice_restores_original() {
    for start in ["light", "dark"] {
        let ctl = ThemeController::new(MemoryMarker::with_value(start), MemoryStore::new());
        ctl.toggle_theme();
        assert_ne!(ctl.marker().get().as_deref(), Some(start));
        ctl.toggle_theme();
        assert_eq!(ctl.marker().get().as_deref(), Some(start));
    }
}

#[test]
fn toggle_from_unrecognized_marker_gives_light() {
    let ctl = ThemeController::new(MemoryMarker::with_value("sepia"), MemoryStore::new());
    assert_eq!(ctl.current(), None);
    assert_eq!(ctl.toggle_theme(), Theme::Light);
    assert_eq!(ctl.current(), Some(Theme::Light));
}

// =============================================================
// load_theme
// =============================================================

#[test]
fn load_after_reload_restores_dark() {
    let marker = MemoryMarker::new();
    let store = MemoryStore::new();

    ThemeController::new(&marker, &store).set_theme("dark").expect("dark");

    marker.clear();
    assert_eq!(marker.get(), None);

    ThemeController::new(&marker, &store).load_theme().expect("load");
    assert_eq!(marker.get().as_deref(), Some("dark"));
}

#[test]
fn load_with_nothing_stored_is_a_no_op() {
    let ctl = controller();
    ctl.load_theme().expect("load");
    assert_eq!(ctl.marker().get(), None);
    assert!(ctl.store().is_empty());
}

#[test]
fn load_with_empty_stored_value_is_a_no_op() {
    let ctl = ThemeController::new(MemoryMarker::with_value("light"), MemoryStore::new());
    ctl.store().insert(DEFAULT_STORAGE_KEY, "");
    ctl.load_theme().expect("load");
    assert_eq!(ctl.marker().get().as_deref(), Some("light"));
}

#[test]
fn load_with_corrupt_value_errors() {
    let ctl = ThemeController::new(MemoryMarker::with_value("light"), MemoryStore::new());
    ctl.store().insert(DEFAULT_STORAGE_KEY, "purple");

    let err = ctl.load_theme().unwrap_err();
    assert_eq!(err.value, "purple");
    assert_eq!(ctl.marker().get().as_deref(), Some("light"));
}

// =============================================================
// Storage unavailable
// =============================================================

#[test]
fn set_theme_succeeds_when_storage_fails() {
    let ctl = ThemeController::new(MemoryMarker::new(), FailingStore::default());
    ctl.set_theme("light").expect("storage errors are swallowed");
    assert_eq!(ctl.marker().get().as_deref(), Some("light"));
    assert_eq!(ctl.store().calls.get(), 1);
}

#[test]
fn toggle_succeeds_when_storage_fails() {
    let ctl = ThemeController::new(MemoryMarker::new(), FailingStore::default());
    assert_eq!(ctl.toggle_theme(), Theme::Dark);
    assert_eq!(ctl.current(), Some(Theme::Dark));
}

#[test]
fn load_succeeds_and_leaves_marker_when_storage_fails() {
    let ctl = ThemeController::new(MemoryMarker::with_value("dark"), FailingStore::default());
    ctl.load_theme().expect("read errors are swallowed");
    assert_eq!(ctl.marker().get().as_deref(), Some("dark"));
    assert_eq!(ctl.store().calls.get(), 1);
}

#[test]
fn invalid_theme_still_errors_when_storage_fails() {
    let ctl = ThemeController::new(MemoryMarker::new(), FailingStore::default());
    assert!(ctl.set_theme("night").is_err());
    assert_eq!(ctl.store().calls.get(), 0);
}
