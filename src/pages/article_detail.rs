//! Article Detail Page

use blog_core::api::ArticleQuery;
use blog_core::text::format_long_date;
use blog_core::{related_articles, Article};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ArticleCard, Footer, Header};
use crate::context::use_app;

#[derive(Clone)]
enum Loaded {
    Pending,
    Found(Box<Article>),
    Missing,
}

#[component]
pub fn ArticleDetailPage(id: String) -> impl IntoView {
    let ctx = use_app();
    let related_limit = ctx.config().related_articles;
    let (article, set_article) = signal(Loaded::Pending);
    let (others, set_others) = signal(Vec::<Article>::new());

    spawn_local(async move {
        let api = ctx.api();
        let found = match api.get_article(&id).await {
            Ok(found) => found,
            Err(e) => {
                log::warn!("article {} unavailable: {}", id, e);
                set_article.set(Loaded::Missing);
                return;
            }
        };

        if let Some(category_id) = found.category_id().map(str::to_string) {
            // One extra so the current article can be excluded.
            let query = ArticleQuery::newest(related_limit + 1).with_category(category_id.clone());
            match api.list_articles(&query).await {
                Ok(paged) => set_others.set(related_articles(&paged.data, &category_id, &found.id, related_limit)),
                Err(e) => log::warn!("related articles unavailable: {}", e),
            }
        }
        set_article.set(Loaded::Found(Box::new(found)));
    });

    view! {
        <div class="page">
            <Header />
            <main class="article-detail">
                {move || match article.get() {
                    Loaded::Pending => view! { <p class="loading">"Loading..."</p> }.into_any(),
                    Loaded::Missing => view! { <p class="empty">"Article not found"</p> }.into_any(),
                    Loaded::Found(article) => view! {
                        <p class="article-meta">
                            {format!("{} • Created by {}", format_long_date(&article.created_at), article.author_name())}
                        </p>
                        <h1 class="article-title">{article.title.clone()}</h1>
                        {article.image_url.clone().map(|url| view! {
                            <img class="article-image" src=url alt=article.title.clone() />
                        })}
                        <div class="article-body" inner_html=article.content.clone()></div>
                    }
                        .into_any(),
                }}
                <Show when=move || others.with(|o| !o.is_empty())>
                    <section class="other-articles">
                        <h2>"Other articles"</h2>
                        <div class="article-grid">
                            <For
                                each=move || others.get()
                                key=|article| article.id.clone()
                                children=|article| view! { <ArticleCard article=article /> }
                            />
                        </div>
                    </section>
                </Show>
            </main>
            <Footer />
        </div>
    }
}
