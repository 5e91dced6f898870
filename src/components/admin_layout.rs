//! Admin Layout Component
//!
//! Sidebar navigation, title bar with the signed-in user, and the page body.

use blog_core::text::avatar_initial;
use blog_core::Route;
use leptos::prelude::*;

use crate::components::ConfirmModal;
use crate::context::use_app;

#[component]
pub fn AdminLayout(
    /// Shown in the title bar ("Articles", "Category", ...)
    #[prop(into)]
    title: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_app();
    let (confirm_logout, set_confirm_logout) = signal(false);

    let is_active = move |route: &Route| {
        let current = ctx.route.get();
        match route {
            // The article list owns the article form and preview pages too.
            Route::AdminArticles => matches!(
                current,
                Route::AdminArticles | Route::AdminNewArticle | Route::AdminEditArticle(_) | Route::AdminPreview
            ),
            other => &current == other,
        }
    };

    let username = move || ctx.session().map(|s| s.username).unwrap_or_default();

    view! {
        <div class="admin-layout">
            <aside class="sidebar">
                <a class="logo" href=Route::AdminArticles.href()>"Logoipsum"</a>
                <nav class="sidebar-nav">
                    {[("Articles", Route::AdminArticles), ("Category", Route::AdminCategories)]
                        .into_iter()
                        .map(|(label, route)| {
                            let href = route.href();
                            view! {
                                <a
                                    href=href
                                    class=move || if is_active(&route) { "sidebar-link active" } else { "sidebar-link" }
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <button class="sidebar-link" on:click=move |_| set_confirm_logout.set(true)>
                        "Logout"
                    </button>
                </nav>
            </aside>
            <section class="admin-main">
                <div class="admin-titlebar">
                    <h2>{title}</h2>
                    <a class="admin-user" href=Route::Profile.href()>
                        <span class="avatar">{move || avatar_initial(&username())}</span>
                        <span class="username">{username}</span>
                    </a>
                </div>
                <div class="admin-content">{children()}</div>
            </section>
            <ConfirmModal
                open=confirm_logout
                title="Logout"
                message="Are you sure want to logout?"
                confirm_label="Logout"
                on_confirm=move |_: ()| {
                    set_confirm_logout.set(false);
                    ctx.logout();
                }
                on_cancel=move |_: ()| set_confirm_logout.set(false)
            />
        </div>
    }
}
