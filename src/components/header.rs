//! Site Header Component
//!
//! Logo plus the session-dependent user menu.

use blog_core::text::avatar_initial;
use blog_core::Route;
use leptos::prelude::*;

use crate::components::ConfirmModal;
use crate::context::use_app;

/// Top bar of the public pages
///
/// `overlay` renders it transparent on top of the home hero.
#[component]
pub fn Header(#[prop(optional)] overlay: bool) -> impl IntoView {
    let ctx = use_app();
    let (menu_open, set_menu_open) = signal(false);
    let (confirm_logout, set_confirm_logout) = signal(false);

    let header_class = if overlay { "site-header overlay" } else { "site-header" };

    view! {
        <header class=header_class>
            <a class="logo" href=Route::Home.href()>"Logoipsum"</a>
            {move || match ctx.session() {
                Some(session) => {
                    let initial = avatar_initial(&session.username);
                    view! {
                        <div class="user-menu">
                            <button
                                class="user-menu-toggle"
                                on:click=move |_| set_menu_open.update(|open| *open = !*open)
                            >
                                <span class="avatar">{initial}</span>
                                <span class="username">{session.username.clone()}</span>
                            </button>
                            <Show when=move || menu_open.get()>
                                <div class="user-menu-dropdown">
                                    <button on:click=move |_| {
                                        set_menu_open.set(false);
                                        ctx.navigate(Route::Profile);
                                    }>"My Account"</button>
                                    <button class="danger" on:click=move |_| {
                                        set_menu_open.set(false);
                                        set_confirm_logout.set(true);
                                    }>"Log out"</button>
                                </div>
                            </Show>
                        </div>
                    }
                        .into_any()
                }
                None => view! {
                    <nav class="auth-links">
                        <a href=Route::Login.href()>"Login"</a>
                        <a class="btn btn-primary" href=Route::Register.href()>"Register"</a>
                    </nav>
                }
                    .into_any(),
            }}
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
        </header>
    }
}
