//! Browser Bindings
//!
//! Thin wrappers over `web_sys` for the pieces the app needs outside the
//! view tree, organized by concern.

mod config;
mod files;
mod navigation;
mod storage;

pub use config::*;
pub use files::*;
pub use navigation::*;
pub use storage::*;

/// Milliseconds since the epoch, from the JS clock
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
