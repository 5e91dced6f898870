//! Pages
//!
//! One component per route. Public pages render the site header and
//! footer themselves; admin pages wrap their body in `AdminLayout`.

mod admin_articles;
mod admin_categories;
mod article_detail;
mod article_form;
mod home;
mod login;
mod preview;
mod profile;
mod register;

pub use admin_articles::AdminArticlesPage;
pub use admin_categories::AdminCategoriesPage;
pub use article_detail::ArticleDetailPage;
pub use article_form::ArticleFormPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use preview::PreviewPage;
pub use profile::ProfilePage;
pub use register::RegisterPage;

use blog_core::Route;
use leptos::prelude::*;

use crate::components::{Footer, Header};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page">
            <Header />
            <main class="not-found">
                <h1>"404"</h1>
                <p>"Page not found"</p>
                <a class="btn btn-primary" href=Route::Home.href()>"Back to home"</a>
            </main>
            <Footer />
        </div>
    }
}
