//! Location hash access

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Point the location hash at `path` (e.g. `/admin`).
pub fn set_hash(path: &str) {
    if let Some(win) = web_sys::window() {
        if win.location().set_hash(path).is_err() {
            log::warn!("could not navigate to {}", path);
        }
    }
}

pub fn scroll_to_top() {
    if let Some(win) = web_sys::window() {
        win.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Call `on_change` with the new hash on every `hashchange` event.
pub fn bind_hash_change<F>(on_change: F)
where
    F: Fn(String) + 'static,
{
    let listener = Closure::<dyn FnMut(web_sys::HashChangeEvent)>::new(move |_ev: web_sys::HashChangeEvent| {
        on_change(current_hash());
    });
    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref());
    }
    listener.forget();
}
