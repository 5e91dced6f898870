//! Article Card Component

use blog_core::text::{excerpt, format_long_date};
use blog_core::{Article, Route};
use leptos::prelude::*;

const EXCERPT_CHARS: usize = 100;

/// Grid card linking to the article detail page
#[component]
pub fn ArticleCard(article: Article) -> impl IntoView {
    let href = Route::Article(article.id.clone()).href();
    let date = format_long_date(&article.created_at);
    let summary = excerpt(&article.content, EXCERPT_CHARS);
    let category = article.category_name().to_string();

    view! {
        <article class="article-card">
            <a href=href.clone() class="card-image">
                {match article.image_url.clone() {
                    Some(url) => view! { <img src=url alt=article.title.clone() /> }.into_any(),
                    None => view! { <div class="image-placeholder"></div> }.into_any(),
                }}
            </a>
            <p class="card-date">{date}</p>
            <a href=href class="card-title">{article.title.clone()}</a>
            <p class="card-excerpt">{summary}</p>
            <span class="badge">{category}</span>
        </article>
    }
}
