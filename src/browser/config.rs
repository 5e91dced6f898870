//! Runtime configuration from `window.__BLOG_CONFIG__`.

use blog_core::AppConfig;
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "__BLOG_CONFIG__";

/// Read the page-provided config object, falling back to defaults.
pub fn load_config() -> AppConfig {
    let Some(window) = web_sys::window() else {
        return AppConfig::default();
    };
    let value = match js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return AppConfig::default(),
    };

    match serde_wasm_bindgen::from_value::<AppConfig>(value) {
        Ok(config) => AppConfig::or_default(Ok(config)),
        Err(e) => {
            log::warn!("{} unreadable, using defaults: {}", CONFIG_GLOBAL, e);
            AppConfig::default()
        }
    }
}
