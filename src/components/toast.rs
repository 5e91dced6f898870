//! Toast notification slot

use leptos::prelude::*;

use crate::context::{use_app, ToastKind};

/// Renders the current toast from [`AppContext`](crate::context::AppContext).
/// The context clears it after the configured delay.
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_app();

    move || {
        ctx.toast.get().map(|toast| {
            let class = match toast.kind {
                ToastKind::Success => "toast toast-success",
                ToastKind::Error => "toast toast-error",
            };
            view! {
                <div class=class role="status">
                    <span class="toast-message">{toast.message}</span>
                    <button class="toast-close" on:click=move |_| ctx.dismiss_toast()>"×"</button>
                </div>
            }
        })
    }
}
