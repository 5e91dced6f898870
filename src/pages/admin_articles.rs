//! Admin Article List
//!
//! Fetches one large page of articles and shapes it locally: category key
//! and debounced title search, then a page slice.

use blog_core::api::ArticleQuery;
use blog_core::text::format_timestamp;
use blog_core::{Article, ListView, RemovalOutcome, Route};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{AdminLayout, CategorySelect, ConfirmModal, PaginationBar};
use crate::context::{use_app, ToastKind};
use crate::hooks::use_debounced_text;

#[component]
pub fn AdminArticlesPage() -> impl IntoView {
    let ctx = use_app();
    let config = ctx.config();
    let list = RwSignal::new(ListView::<Article>::with_page_size(config.admin_page_size));
    let search = use_debounced_text(config.search_debounce());
    let (category, set_category) = signal(String::new());
    let (loading, set_loading) = signal(true);
    let (pending_delete, set_pending_delete) = signal(None::<Article>);

    let fetch_limit = config.admin_fetch_limit;
    spawn_local(async move {
        match ctx.api().list_articles(&ArticleQuery::newest(fetch_limit)).await {
            Ok(paged) => {
                log::debug!("admin list holds {} of {} articles", paged.data.len(), paged.total());
                list.update(|l| l.replace_items(paged.data));
            }
            Err(e) => {
                log::warn!("failed to load articles: {}", e);
                ctx.notify(ToastKind::Error, e.user_message("Failed to load articles"));
            }
        }
        set_loading.set(false);
    });

    Effect::new(move |_| {
        let text = search.settled.get();
        list.update(|l| l.set_query(text));
    });

    let confirm_delete = move |_: ()| {
        let Some(article) = pending_delete.get_untracked() else { return };
        set_pending_delete.set(None);
        let Some(removal) = list.try_update(|l| l.remove_tentatively(&article.id)).flatten() else {
            return;
        };
        spawn_local(async move {
            let result = match ctx.require_session() {
                Ok(session) => ctx.api().delete_article(&session, &article.id).await,
                Err(e) => Err(e),
            };
            let outcome = list.try_update(|l| l.settle_removal(removal, &result));
            if let Some(RemovalOutcome::RolledBack { reason }) = outcome {
                log::warn!("article {} kept: {}", article.id, reason);
            }
            match result {
                Ok(()) => ctx.notify(ToastKind::Success, "Article deleted successfully!"),
                Err(e) => ctx.notify(ToastKind::Error, e.user_message("Failed to delete article!")),
            }
        });
    };

    let rows = move || list.with(|l| l.visible().into_iter().cloned().collect::<Vec<_>>());
    let pagination = Signal::derive(move || list.with(ListView::pagination));

    view! {
        <AdminLayout title="Articles">
            <div class="panel">
                <div class="panel-header">
                    {move || format!("Total Article: {}", list.with(ListView::filtered_len))}
                </div>
                <div class="toolbar">
                    <CategorySelect
                        value=category
                        placeholder="Category"
                        on_change=move |id: String| {
                            set_category.set(id.clone());
                            list.update(|l| l.set_key(Some(id)));
                        }
                    />
                    <input
                        type="text"
                        class="input"
                        placeholder="Search by title"
                        prop:value=move || search.raw.get()
                        on:input=move |ev| search.input(event_target_value(&ev))
                    />
                    <a class="btn btn-primary toolbar-action" href=Route::AdminNewArticle.href()>"+ Add Article"</a>
                </div>

                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Thumbnail"</th>
                            <th>"Title"</th>
                            <th>"Category"</th>
                            <th>"Created at"</th>
                            <th>"Action"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show
                            when=move || !loading.get()
                            fallback=|| view! { <tr><td colspan="5" class="loading">"Loading..."</td></tr> }
                        >
                            <For
                                each=rows
                                key=|article| article.id.clone()
                                children=move |article| {
                                    let to_delete = article.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                {article.image_url.clone().map(|url| view! {
                                                    <img class="thumbnail" src=url alt="" />
                                                })}
                                            </td>
                                            <td>{article.title.clone()}</td>
                                            <td>{article.category_name().to_string()}</td>
                                            <td>{format_timestamp(&article.created_at)}</td>
                                            <td class="actions">
                                                <a class="link" href=Route::Article(article.id.clone()).href()>"Preview"</a>
                                                <a class="link" href=Route::AdminEditArticle(article.id.clone()).href()>"Edit"</a>
                                                <button
                                                    class="link danger"
                                                    on:click=move |_| set_pending_delete.set(Some(to_delete.clone()))
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </Show>
                    </tbody>
                </table>

                <PaginationBar pagination=pagination on_page=move |n: usize| list.update(|l| l.go_to_page(n)) />
            </div>

            <ConfirmModal
                open=Signal::derive(move || pending_delete.with(Option::is_some))
                title="Delete Article"
                message="Deleting this article is permanent and cannot be undone."
                on_confirm=confirm_delete
                on_cancel=move |_: ()| set_pending_delete.set(None)
            />
        </AdminLayout>
    }
}
