use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <span class="footer-logo">"Logoipsum"</span>
            <span>"© 2025 Blog genzet. All rights reserved."</span>
        </footer>
    }
}
