//! Category Catalog Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Categories feed
//! every category select, so they are fetched once and shared.

use blog_core::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::context::AppContext;

#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    /// All categories, in API order
    pub categories: Vec<Category>,
    /// Bumped whenever categories change so dependent lists refetch
    pub version: u32,
}

pub type CatalogStore = Store<CatalogState>;

pub fn use_catalog() -> CatalogStore {
    expect_context::<CatalogStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Fetch categories into the store.
pub fn load_categories(ctx: AppContext, store: CatalogStore) {
    spawn_local(async move {
        match ctx.api().list_categories().await {
            Ok(categories) => {
                log::debug!("loaded {} categories", categories.len());
                store.categories().set(categories);
            }
            Err(e) => log::warn!("failed to load categories: {}", e),
        }
    });
}

pub fn store_upsert_category(store: &CatalogStore, category: Category) {
    let binding = store.categories();
    let mut categories = binding.write();
    match categories.iter_mut().find(|c| c.id == category.id) {
        Some(slot) => *slot = category,
        None => categories.push(category),
    }
    drop(categories);
    store.version().update(|v| *v += 1);
}

pub fn store_remove_category(store: &CatalogStore, category_id: &str) {
    store.categories().write().retain(|c| c.id != category_id);
    store.version().update(|v| *v += 1);
}

/// `(id, name)` pairs for category selects
pub fn category_options(store: &CatalogStore) -> Vec<(String, String)> {
    store
        .categories()
        .get()
        .into_iter()
        .filter(|c| !c.id.is_empty())
        .map(|c| (c.id, c.name))
        .collect()
}
