//! Article Form Page
//!
//! Create and edit share one form. The draft (fields plus editor HTML) is
//! written to localStorage before opening the preview and restored when
//! the form for the same article is opened again.

use blog_core::api::ArticleDraft;
use blog_core::validation::{validate_article, ArticleErrors};
use blog_core::{Editor, Route};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser::{self, object_url, read_upload, selected_file};
use crate::components::{AdminLayout, CategorySelect, RichEditor};
use crate::context::{use_app, ToastKind};

#[component]
pub fn ArticleFormPage(
    /// `None` creates a new article
    #[prop(optional)]
    article_id: Option<String>,
) -> impl IntoView {
    let ctx = use_app();
    let is_edit = article_id.is_some();
    let article_id = StoredValue::new(article_id);

    let (title, set_title) = signal(String::new());
    let (category_id, set_category_id) = signal(String::new());
    let (image_url, set_image_url) = signal(String::new());
    let (thumbnail, set_thumbnail) = signal(None::<String>);
    let editor = RwSignal::new(Editor::default());
    let (errors, set_errors) = signal(ArticleErrors::default());
    let (loading, set_loading) = signal(is_edit);
    let (uploading, set_uploading) = signal(false);
    let (submitting, set_submitting) = signal(false);

    let fill = move |draft: ArticleDraft| {
        set_title.set(draft.title);
        set_category_id.set(draft.category_id);
        set_thumbnail.set(Some(draft.image_url.clone()).filter(|u| !u.is_empty()));
        set_image_url.set(draft.image_url);
        editor.set(Editor::from_html(&draft.content));
    };

    let snapshot = move || ArticleDraft {
        article_id: article_id.get_value(),
        title: title.get_untracked(),
        category_id: category_id.get_untracked(),
        content: editor.with_untracked(Editor::to_html),
        image_url: image_url.get_untracked(),
    };

    // Back from the preview: restore what was typed. Otherwise an edit
    // form starts from the stored article.
    let saved = browser::load_draft().filter(|d| article_id.with_value(|id| d.belongs_to(id.as_deref())));
    match (saved, article_id.get_value()) {
        (Some(draft), _) => {
            fill(draft);
            set_loading.set(false);
        }
        (None, Some(id)) => spawn_local(async move {
            match ctx.api().get_article(&id).await {
                Ok(article) => fill(ArticleDraft::from_article(&article)),
                Err(e) => {
                    log::warn!("article {} unavailable: {}", id, e);
                    ctx.notify(ToastKind::Error, e.user_message("Failed to load article"));
                }
            }
            set_loading.set(false);
        }),
        (None, None) => {}
    }

    let on_thumbnail = move |ev: web_sys::Event| {
        let Some(file) = selected_file(&ev) else { return };
        set_thumbnail.set(object_url(&file));
        set_uploading.set(true);
        spawn_local(async move {
            let session = ctx.require_session().ok();
            let uploaded = match read_upload(&file).await {
                Ok(upload) => ctx
                    .api()
                    .upload_image(session.as_ref(), upload)
                    .await
                    .map_err(|e| e.to_string()),
                Err(e) => Err(e),
            };
            match uploaded {
                Ok(response) => set_image_url.set(response.url),
                Err(e) => {
                    log::warn!("thumbnail upload failed: {}", e);
                    set_thumbnail.set(None);
                    ctx.notify(ToastKind::Error, "Failed to upload thumbnail");
                }
            }
            set_uploading.set(false);
        });
    };

    let preview = move |_| {
        browser::save_draft(&snapshot());
        ctx.navigate(Route::AdminPreview);
    };

    let cancel = move |_| {
        browser::clear_draft();
        ctx.navigate(Route::AdminArticles);
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = snapshot();
        let found = validate_article(&draft);
        let valid = found.is_empty();
        set_errors.set(found);
        if !valid {
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            let payload = draft.to_payload();
            let result = match ctx.require_session() {
                Err(e) => Err(e),
                Ok(session) => match &draft.article_id {
                    Some(id) => ctx.api().update_article(&session, id, &payload).await,
                    None => ctx.api().create_article(&session, &payload).await,
                },
            };
            match (result, draft.article_id.is_some()) {
                (Ok(saved), false) => {
                    log::info!("created article {}", saved.id);
                    browser::clear_draft();
                    ctx.notify(ToastKind::Success, "Article added successfully!");
                    ctx.after_redirect_delay(move || ctx.navigate(Route::AdminArticles));
                }
                (Ok(saved), true) => {
                    log::info!("updated article {}", saved.id);
                    browser::clear_draft();
                    ctx.notify(ToastKind::Success, "Article updated successfully!");
                    ctx.navigate(Route::AdminArticles);
                }
                (Err(e), false) => {
                    log::warn!("create article failed: {}", e);
                    ctx.notify(ToastKind::Error, e.user_message("Failed to add article"));
                }
                (Err(e), true) => {
                    log::warn!("update article failed: {}", e);
                    ctx.notify(ToastKind::Error, e.user_message("Failed to update article"));
                }
            }
            set_submitting.set(false);
        });
    };

    let field_error = move |pick: fn(&ArticleErrors) -> Option<&'static str>| {
        move || errors.with(|e| pick(e)).map(|m| view! { <p class="field-error">{m}</p> })
    };

    view! {
        <AdminLayout title="Articles">
            <Show when=move || !loading.get() fallback=|| view! { <p class="loading">"Loading..."</p> }>
                <form class="panel article-form" on:submit=submit>
                    <h2 class="panel-header">
                        <a class="back-link" href=Route::AdminArticles.href()>"←"</a>
                        {if is_edit { "Edit Articles" } else { "Create Articles" }}
                    </h2>

                    <div class="field">
                        <span>"Thumbnails"</span>
                        <label class="thumbnail-picker">
                            {move || match thumbnail.get() {
                                Some(url) => view! { <img class="thumbnail-preview" src=url alt="Thumbnail" /> }.into_any(),
                                None => view! {
                                    <div class="thumbnail-empty">
                                        <span>"Click to select file"</span>
                                        <span class="hint">"Support file type: jpg or png"</span>
                                    </div>
                                }
                                    .into_any(),
                            }}
                            <input type="file" accept="image/png, image/jpeg" class="hidden" on:change=on_thumbnail />
                        </label>
                        <Show when=move || uploading.get()>
                            <p class="hint">"Uploading..."</p>
                        </Show>
                    </div>

                    <label class="field">
                        <span>"Title"</span>
                        <input
                            type="text"
                            class="input"
                            placeholder="Input title"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                        />
                        {field_error(|e| e.title)}
                    </label>

                    <label class="field">
                        <span>"Category"</span>
                        <CategorySelect value=category_id on_change=move |id: String| set_category_id.set(id) />
                        {field_error(|e| e.category)}
                    </label>

                    <div class="field">
                        <RichEditor editor=editor />
                        {field_error(|e| e.content)}
                    </div>

                    <div class="form-actions">
                        <button type="button" class="btn btn-outline" on:click=cancel>"Cancel"</button>
                        <button type="button" class="btn btn-muted" on:click=preview>"Preview"</button>
                        <button type="submit" class="btn btn-primary" disabled=move || submitting.get() || uploading.get()>
                            {if is_edit { "Save Changes" } else { "Upload" }}
                        </button>
                    </div>
                </form>
            </Show>
        </AdminLayout>
    }
}
