//! Article Preview
//!
//! Renders the draft saved by the article form, as the detail page would.

use blog_core::text::format_long_date;
use blog_core::Route;
use chrono::DateTime;
use leptos::prelude::*;

use crate::browser;
use crate::components::AdminLayout;
use crate::store::{use_catalog, CatalogStateStoreFields};

#[component]
pub fn PreviewPage() -> impl IntoView {
    let store = use_catalog();
    let draft = browser::load_draft();
    let today = DateTime::from_timestamp_millis(browser::now_ms() as i64)
        .map(|now| format_long_date(&now))
        .unwrap_or_default();

    let Some(draft) = draft else {
        return view! {
            <AdminLayout title="Articles">
                <div class="panel">
                    <p class="empty">"Nothing to preview"</p>
                    <a class="btn btn-primary" href=Route::AdminNewArticle.href()>"Create Articles"</a>
                </div>
            </AdminLayout>
        }
            .into_any();
    };

    let back = match &draft.article_id {
        Some(id) => Route::AdminEditArticle(id.clone()),
        None => Route::AdminNewArticle,
    };
    let category_id = draft.category_id.clone();
    let category_name = move || {
        store
            .categories()
            .with(|all| all.iter().find(|c| c.id == category_id).map(|c| c.name.clone()))
            .unwrap_or_default()
    };
    let image = Some(draft.image_url.clone()).filter(|u| !u.is_empty());

    view! {
        <AdminLayout title="Articles">
            <div class="panel preview">
                <a class="back-link" href=back.href()>"← Back to form"</a>
                <article class="article-detail">
                    <p class="article-meta">{format!("{} • Preview Only", today)}</p>
                    <h1 class="article-title">{draft.title.clone()}</h1>
                    <span class="badge">{category_name}</span>
                    {image.map(|url| view! { <img class="article-image" src=url alt=draft.title.clone() /> })}
                    <div class="article-body" inner_html=draft.content.clone()></div>
                </article>
            </div>
        </AdminLayout>
    }
        .into_any()
}
