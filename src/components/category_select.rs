//! Category Select Component
//!
//! `<select>` over the shared category catalog.

use leptos::prelude::*;

use crate::store::{category_options, use_catalog};

#[component]
pub fn CategorySelect(
    /// Selected category id; empty means none
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into, default = "Select category".to_string())] placeholder: String,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let store = use_catalog();
    let class = if class.is_empty() { "select".to_string() } else { format!("select {}", class) };

    view! {
        <select
            class=class
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">{placeholder}</option>
            {move || {
                let selected = value.get();
                category_options(&store)
                    .into_iter()
                    .map(|(id, name)| {
                        let is_selected = id == selected;
                        view! { <option value=id selected=is_selected>{name}</option> }
                    })
                    .collect_view()
            }}
        </select>
    }
}
