//! Confirm Modal Component
//!
//! Reusable confirmation dialog for destructive actions (delete, logout).

use leptos::prelude::*;

/// Modal confirmation dialog
///
/// # Arguments
/// * `open` - Whether the dialog is shown
/// * `title` / `message` - Dialog heading and body text
/// * `confirm_label` - Text of the confirm button (e.g., "Delete" or "Logout")
/// * `on_confirm` - Callback to execute when the user confirms
/// * `on_cancel` - Callback for Cancel and backdrop clicks
#[component]
pub fn ConfirmModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into, default = "Delete".to_string())] confirm_label: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_class = if confirm_label == "Delete" {
        "btn btn-danger"
    } else {
        "btn btn-primary"
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_cancel.run(())>
                <div class="modal" role="dialog" on:click=|ev| ev.stop_propagation()>
                    <h3 class="modal-title">{title.clone()}</h3>
                    <p class="modal-message">{message.clone()}</p>
                    <div class="modal-actions">
                        <button class="btn btn-outline" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button
                            class=confirm_class
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_confirm.run(());
                            }
                        >
                            {confirm_label.clone()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
