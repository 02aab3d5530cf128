//! JS surface: free `wasm-bindgen` exports plus the `window.masterNES`
//! namespace object installed at module start.
//!
//! Pages call `masterNES.loadTheme()` once on load and wire
//! `masterNES.toggleTheme()` to their toggle control.

use wasm_bindgen::prelude::*;

use crate::browser::{DocumentRoot, LocalStorage};
use crate::config::ThemeConfig;
use crate::controller::ThemeController;
use crate::theme::InvalidThemeError;

const NAMESPACE: &str = "masterNES";

fn controller() -> ThemeController<DocumentRoot, LocalStorage> {
    let config = ThemeConfig::default();
    ThemeController::with_storage_key(DocumentRoot::new(&config.attribute), LocalStorage, config.storage_key)
}

fn js_error(e: InvalidThemeError) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}

/// `setTheme(theme)`. Throws unless `theme` is `"light"` or `"dark"`.
///
/// Takes a raw `JsValue` so `undefined`, `null`, and non-strings surface as
/// the same invalid-theme error instead of a binding type error.
///
/// # Errors
///
/// Returns a JS `Error` for any value other than the two theme literals.
#[wasm_bindgen(js_name = setTheme)]
pub fn set_theme(theme: JsValue) -> Result<(), JsValue> {
    let theme = theme.as_string().unwrap_or_else(|| format!("{theme:?}"));
    controller().set_theme(&theme).map_err(js_error)
}

#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() {
    controller().toggle_theme();
}

/// `loadTheme()`. Throws only when the saved value is corrupt.
///
/// # Errors
///
/// Returns a JS `Error` when `localStorage` holds something other than the
/// two theme literals under the theme key.
#[wasm_bindgen(js_name = loadTheme)]
pub fn load_theme() -> Result<(), JsValue> {
    controller().load_theme().map_err(js_error)
}

/// Module entry point: logging, panic hook, then `window.masterNES`.
///
/// # Errors
///
/// Returns the JS exception if the namespace cannot be attached to `window`.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    install_namespace()
}

fn install_namespace() -> Result<(), JsValue> {
    let Some(window) = web_sys::window() else {
        log::warn!("theme: no window, {NAMESPACE} not installed");
        return Ok(());
    };

    let api = js_sys::Object::new();
    let set = Closure::<dyn Fn(JsValue) -> Result<(), JsValue>>::new(set_theme);
    let toggle = Closure::<dyn Fn()>::new(toggle_theme);
    let load = Closure::<dyn Fn() -> Result<(), JsValue>>::new(load_theme);

    // The closures live for the page's lifetime; into_js_value leaks them.
    js_sys::Reflect::set(&api, &"setTheme".into(), &set.into_js_value())?;
    js_sys::Reflect::set(&api, &"toggleTheme".into(), &toggle.into_js_value())?;
    js_sys::Reflect::set(&api, &"loadTheme".into(), &load.into_js_value())?;
    js_sys::Reflect::set(&window, &NAMESPACE.into(), &api)?;

    log::debug!("theme: installed window.{NAMESPACE}");
    Ok(())
}
