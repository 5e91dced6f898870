//! Admin Category List
//!
//! The shared catalog store is the source of truth; this page layers a
//! debounced name search, pagination and the add/edit/delete dialogs on it.

use blog_core::api::CategoryPayload;
use blog_core::text::format_timestamp;
use blog_core::validation::validate_category_name;
use blog_core::{Category, ListView};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{AdminLayout, ConfirmModal, PaginationBar};
use crate::context::{use_app, ToastKind};
use crate::hooks::use_debounced_text;
use crate::store::{load_categories, store_remove_category, store_upsert_category, use_catalog, CatalogStateStoreFields};

/// Which category the add/edit dialog is working on
#[derive(Debug, Clone, PartialEq)]
enum Dialog {
    Add,
    Edit(Category),
}

#[component]
pub fn AdminCategoriesPage() -> impl IntoView {
    let ctx = use_app();
    let store = use_catalog();
    let config = ctx.config();
    let list = RwSignal::new(ListView::<Category>::with_page_size(config.admin_page_size));
    let search = use_debounced_text(config.search_debounce());

    let (dialog, set_dialog) = signal(None::<Dialog>);
    let (name, set_name) = signal(String::new());
    let (name_error, set_name_error) = signal(None::<&'static str>);
    let (saving, set_saving) = signal(false);
    let (pending_delete, set_pending_delete) = signal(None::<Category>);

    load_categories(ctx, store);

    Effect::new(move |_| {
        let categories = store.categories().get();
        list.update(|l| l.replace_items(categories));
    });

    Effect::new(move |_| {
        let text = search.settled.get();
        list.update(|l| l.set_query(text));
    });

    let open_dialog = move |target: Dialog| {
        set_name.set(match &target {
            Dialog::Add => String::new(),
            Dialog::Edit(category) => category.name.clone(),
        });
        set_name_error.set(None);
        set_dialog.set(Some(target));
    };

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(target) = dialog.get_untracked() else { return };
        let payload = match validate_category_name(&name.get_untracked()) {
            Ok(name) => CategoryPayload { name },
            Err(message) => {
                set_name_error.set(Some(message));
                return;
            }
        };

        set_saving.set(true);
        spawn_local(async move {
            let (result, success, failure) = match ctx.require_session() {
                Err(e) => (Err(e), "", "Failed to save category!"),
                Ok(session) => match &target {
                    Dialog::Add => (
                        ctx.api().create_category(&session, &payload).await,
                        "Category added successfully!",
                        "Failed to add category!",
                    ),
                    Dialog::Edit(category) => (
                        ctx.api().update_category(&session, &category.id, &payload).await,
                        "Category updated successfully!",
                        "Failed to update category!",
                    ),
                },
            };
            match result {
                Ok(saved) => {
                    store_upsert_category(&store, saved);
                    set_dialog.set(None);
                    ctx.notify(ToastKind::Success, success);
                }
                Err(e) => {
                    log::warn!("category save failed: {}", e);
                    ctx.notify(ToastKind::Error, failure);
                }
            }
            set_saving.set(false);
        });
    };

    let confirm_delete = move |_: ()| {
        let Some(category) = pending_delete.get_untracked() else { return };
        set_pending_delete.set(None);
        let Some(removal) = list.try_update(|l| l.remove_tentatively(&category.id)).flatten() else {
            return;
        };
        spawn_local(async move {
            let result = match ctx.require_session() {
                Ok(session) => ctx.api().delete_category(&session, &category.id).await,
                Err(e) => Err(e),
            };
            list.update(|l| {
                let _ = l.settle_removal(removal, &result);
            });
            match result {
                Ok(()) => {
                    store_remove_category(&store, &category.id);
                    ctx.notify(ToastKind::Success, "Category deleted successfully!");
                }
                Err(e) => {
                    log::warn!("category {} kept: {}", category.id, e);
                    ctx.notify(ToastKind::Error, "Failed to delete category!");
                }
            }
        });
    };

    let rows = move || list.with(|l| l.visible().into_iter().cloned().collect::<Vec<_>>());
    let pagination = Signal::derive(move || list.with(ListView::pagination));
    let is_edit = move || matches!(dialog.get(), Some(Dialog::Edit(_)));

    view! {
        <AdminLayout title="Category">
            <div class="panel">
                <div class="panel-header">
                    {move || format!("Total Category: {}", list.with(ListView::total_len))}
                </div>
                <div class="toolbar">
                    <input
                        type="text"
                        class="input"
                        placeholder="Search Category"
                        prop:value=move || search.raw.get()
                        on:input=move |ev| search.input(event_target_value(&ev))
                    />
                    <button class="btn btn-primary toolbar-action" on:click=move |_| open_dialog(Dialog::Add)>
                        "+ Add Category"
                    </button>
                </div>

                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Category"</th>
                            <th>"Created at"</th>
                            <th>"Action"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=rows
                            key=|category| (category.id.clone(), category.name.clone())
                            children=move |category| {
                                let to_edit = category.clone();
                                let to_delete = category.clone();
                                view! {
                                    <tr>
                                        <td>{category.name.clone()}</td>
                                        <td>{category.created_at.as_ref().map(format_timestamp).unwrap_or_default()}</td>
                                        <td class="actions">
                                            <button class="link" on:click=move |_| open_dialog(Dialog::Edit(to_edit.clone()))>
                                                "Edit"
                                            </button>
                                            <button
                                                class="link danger"
                                                on:click=move |_| set_pending_delete.set(Some(to_delete.clone()))
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>

                <PaginationBar pagination=pagination on_page=move |n: usize| list.update(|l| l.go_to_page(n)) />
            </div>

            <Show when=move || dialog.with(Option::is_some)>
                <div class="modal-backdrop" on:click=move |_| set_dialog.set(None)>
                    <form class="modal" on:click=|ev| ev.stop_propagation() on:submit=save>
                        <h3 class="modal-title">{move || if is_edit() { "Edit Category" } else { "Add Category" }}</h3>
                        <label class="field">
                            <span>"Category"</span>
                            <input
                                type="text"
                                class="input"
                                placeholder="Input Category"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                            {move || name_error.get().map(|m| view! { <p class="field-error">{m}</p> })}
                        </label>
                        <div class="modal-actions">
                            <button type="button" class="btn btn-outline" on:click=move |_| set_dialog.set(None)>
                                "Cancel"
                            </button>
                            <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                                {move || if is_edit() { "Save Changes" } else { "Add" }}
                            </button>
                        </div>
                    </form>
                </div>
            </Show>

            <ConfirmModal
                open=Signal::derive(move || pending_delete.with(Option::is_some))
                title="Delete Category"
                message="Deleting this category is permanent and cannot be undone. All related content will be removed."
                on_confirm=confirm_delete
                on_cancel=move |_: ()| set_pending_delete.set(None)
            />
        </AdminLayout>
    }
}
