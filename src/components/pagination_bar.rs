//! Pagination Bar Component
//!
//! "< Previous", numbered pages with ellipses, "Next >". Hidden when there
//! is at most one page.

use blog_core::{PageLabel, Pagination};
use leptos::prelude::*;

#[component]
pub fn PaginationBar(
    #[prop(into)] pagination: Signal<Pagination>,
    /// Called with the requested 1-indexed page
    #[prop(into)]
    on_page: Callback<usize>,
) -> impl IntoView {
    let current = move || pagination.with(|p| p.current_page);
    let at_first = move || current() <= 1;
    let at_last = move || pagination.with(|p| p.current_page >= p.page_count);

    view! {
        <Show when=move || pagination.with(Pagination::has_controls)>
            <nav class="pagination">
                <button
                    class="page-nav"
                    disabled=at_first
                    on:click=move |_| {
                        if !at_first() {
                            on_page.run(current() - 1);
                        }
                    }
                >
                    "< Previous"
                </button>
                {move || {
                    let p = pagination.get();
                    p.labels
                        .into_iter()
                        .map(|label| match label {
                            PageLabel::Page(n) => {
                                let class = if n == p.current_page { "page-btn active" } else { "page-btn" };
                                view! {
                                    <button class=class on:click=move |_| on_page.run(n)>{n}</button>
                                }
                                    .into_any()
                            }
                            PageLabel::Ellipsis => view! { <span class="page-ellipsis">"..."</span> }.into_any(),
                        })
                        .collect_view()
                }}
                <button
                    class="page-nav"
                    disabled=at_last
                    on:click=move |_| {
                        if !at_last() {
                            on_page.run(current() + 1);
                        }
                    }
                >
                    "Next >"
                </button>
            </nav>
        </Show>
    }
}
