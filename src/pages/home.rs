//! Home Page
//!
//! Hero with category and title filters over a server-paginated grid.

use blog_core::api::ArticleQuery;
use blog_core::{Article, Pagination, Paginator};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ArticleCard, CategorySelect, Footer, Header, PaginationBar};
use crate::context::use_app;
use crate::hooks::use_debounced_text;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app();
    let config = ctx.config();
    let paginator = Paginator::at_least_one(config.public_page_size);

    let search = use_debounced_text(config.search_debounce());
    let (category, set_category) = signal(String::new());
    let (page, set_page) = signal(1usize);
    let (articles, set_articles) = signal(Vec::<Article>::new());
    let (total, set_total) = signal(0usize);
    let (loading, set_loading) = signal(true);

    // A settled search text starts over from the first page.
    Effect::new(move |previous: Option<String>| {
        let text = search.settled.get();
        if previous.is_some_and(|p| p != text) {
            set_page.set(1);
        }
        text
    });

    // Refetch on every criteria or page change; the last response wins.
    Effect::new(move |_| {
        let query = ArticleQuery::newest(paginator.page_size())
            .with_title(search.settled.get())
            .with_category(category.get())
            .at_page(page.get());
        set_loading.set(true);
        spawn_local(async move {
            match ctx.api().list_articles(&query).await {
                Ok(paged) => {
                    set_total.set(paged.total());
                    set_articles.set(paged.data);
                }
                Err(e) => {
                    log::warn!("failed to load articles: {}", e);
                    set_total.set(0);
                    set_articles.set(Vec::new());
                }
            }
            set_loading.set(false);
        });
    });

    let pagination = Signal::derive(move || -> Pagination { paginator.paginate(total.get(), page.get()) });

    view! {
        <div class="page home">
            <section class="hero">
                <Header overlay=true />
                <div class="hero-body">
                    <p class="hero-kicker">"Blog genzet"</p>
                    <h1 class="hero-title">"The Journal : Design Resources, Interviews, and Industry News"</h1>
                    <p class="hero-tagline">"Your daily dose of design insights!"</p>
                    <div class="hero-filters">
                        <CategorySelect
                            value=category
                            on_change=move |id: String| {
                                set_category.set(id);
                                set_page.set(1);
                            }
                        />
                        <input
                            type="text"
                            class="input"
                            placeholder="Search articles"
                            prop:value=move || search.raw.get()
                            on:input=move |ev| search.input(event_target_value(&ev))
                        />
                    </div>
                </div>
            </section>

            <main class="home-content">
                <p class="result-count">
                    {move || format!("Showing {} of {} articles", articles.with(Vec::len), total.get())}
                </p>
                <Show
                    when=move || !(loading.get() && articles.with(Vec::is_empty))
                    fallback=|| view! { <p class="loading">"Loading..."</p> }
                >
                    <div class="article-grid">
                        <For
                            each=move || articles.get()
                            key=|article| article.id.clone()
                            children=|article| view! { <ArticleCard article=article /> }
                        />
                    </div>
                </Show>
                <PaginationBar pagination=pagination on_page=move |n: usize| set_page.set(n) />
            </main>
            <Footer />
        </div>
    }
}
