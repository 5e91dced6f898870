use blog_core::text::avatar_initial;
use blog_core::{Route, Session};
use leptos::prelude::*;

use crate::components::{AdminLayout, Footer, Header};
use crate::context::use_app;

/// The password never leaves the login form, so it is shown masked.
const MASKED_PASSWORD: &str = "********";

#[component]
fn ProfileCard(session: Session) -> impl IntoView {
    let (back_route, back_label) = if session.is_admin() {
        (Route::AdminArticles, "Back to dashboard")
    } else {
        (Route::Home, "Back to home")
    };

    view! {
        <div class="profile-card">
            <h1>"User Profile"</h1>
            <div class="avatar avatar-large">{avatar_initial(&session.username)}</div>
            <dl class="profile-fields">
                <dt>"Username :"</dt>
                <dd>{session.username.clone()}</dd>
                <dt>"Password :"</dt>
                <dd>{MASKED_PASSWORD}</dd>
                <dt>"Role :"</dt>
                <dd>{session.role.as_str()}</dd>
            </dl>
            <a class="btn btn-primary btn-block" href=back_route.href()>{back_label}</a>
        </div>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_app();

    move || match ctx.session() {
        Some(session) if session.is_admin() => view! {
            <AdminLayout title="User Profile">
                <ProfileCard session=session.clone() />
            </AdminLayout>
        }
            .into_any(),
        Some(session) => view! {
            <div class="page">
                <Header />
                <main class="profile-page">
                    <ProfileCard session=session />
                </main>
                <Footer />
            </div>
        }
            .into_any(),
        // Route guard redirects to login.
        None => ().into_any(),
    }
}
