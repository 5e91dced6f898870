//! localStorage persistence for the session and the article draft.

use blog_core::api::ArticleDraft;
use blog_core::Session;
use serde::de::DeserializeOwned;
use serde::Serialize;

const SESSION_KEY: &str = "blog-console.session";
const DRAFT_KEY: &str = "blog-console.draft";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = local_storage()?.get_item(key).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("discarding unreadable {}: {}", key, e);
            remove(key);
            None
        }
    }
}

fn save<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = local_storage() else {
        log::warn!("localStorage unavailable, {} not saved", key);
        return;
    };
    match serde_json::to_string(value) {
        Ok(raw) => {
            if storage.set_item(key, &raw).is_err() {
                log::warn!("could not write {}", key);
            }
        }
        Err(e) => log::warn!("could not encode {}: {}", key, e),
    }
}

fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

pub fn load_session() -> Option<Session> {
    load(SESSION_KEY)
}

pub fn save_session(session: &Session) {
    save(SESSION_KEY, session);
}

pub fn clear_session() {
    remove(SESSION_KEY);
}

pub fn load_draft() -> Option<ArticleDraft> {
    load(DRAFT_KEY)
}

pub fn save_draft(draft: &ArticleDraft) {
    save(DRAFT_KEY, draft);
}

pub fn clear_draft() {
    remove(DRAFT_KEY);
}
