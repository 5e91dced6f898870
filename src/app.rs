//! Blog Console App
//!
//! Root component: services and stores go into context, then the current
//! hash route (after the session guard) picks the page.

use std::rc::Rc;

use blog_core::api::{BlogApi, HttpBlogApi};
use blog_core::{AppConfig, Route};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::browser;
use crate::components::ToastHost;
use crate::context::AppContext;
use crate::pages::{
    AdminArticlesPage, AdminCategoriesPage, ArticleDetailPage, ArticleFormPage, HomePage, LoginPage,
    NotFoundPage, PreviewPage, ProfilePage, RegisterPage,
};
use crate::store::{load_categories, CatalogState};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let api: Rc<dyn BlogApi> = Rc::new(HttpBlogApi::from_config(&config));
    let ctx = AppContext::new(config, api);
    let catalog = Store::new(CatalogState::default());

    // Provide context to all children
    provide_context(ctx);
    provide_context(catalog);

    load_categories(ctx, catalog);
    browser::bind_hash_change(move |hash| ctx.on_hash_change(&hash));

    // Route after the session guard; only changes when the page must.
    let page = Memo::new(move |_| {
        let route = ctx.route.get();
        ctx.sessions.with(|s| route.guard(s.current()))
    });

    // Keep the address bar in step with guard redirects.
    Effect::new(move |_| {
        let target = page.get();
        if ctx.route.get_untracked() != target {
            log::info!("redirecting {} -> {}", ctx.route.get_untracked().path(), target.path());
            ctx.navigate(target);
        }
    });

    view! {
        {move || match page.get() {
            Route::Home => view! { <HomePage /> }.into_any(),
            Route::Article(id) => view! { <ArticleDetailPage id=id /> }.into_any(),
            Route::Login => view! { <LoginPage /> }.into_any(),
            Route::Register => view! { <RegisterPage /> }.into_any(),
            Route::Profile => view! { <ProfilePage /> }.into_any(),
            Route::AdminArticles => view! { <AdminArticlesPage /> }.into_any(),
            Route::AdminCategories => view! { <AdminCategoriesPage /> }.into_any(),
            Route::AdminNewArticle => view! { <ArticleFormPage /> }.into_any(),
            Route::AdminEditArticle(id) => view! { <ArticleFormPage article_id=id /> }.into_any(),
            Route::AdminPreview => view! { <PreviewPage /> }.into_any(),
            Route::NotFound => view! { <NotFoundPage /> }.into_any(),
        }}
        <ToastHost />
    }
}
