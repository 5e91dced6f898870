//! Rich Editor Component
//!
//! Toolbar over a block list: one textarea per paragraph, one figure per
//! image. Every edit goes through [`Editor`], which owns the document,
//! selection and undo history; the formatted result is rendered below.

use blog_core::editor::Block;
use blog_core::text::utf16_to_char_index;
use blog_core::{Command, Editor, Selection};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser::{read_upload, selected_file};
use crate::context::{use_app, ToastKind};

/// (command name, label, tooltip)
const TOOLBAR: &[(&str, &str, &str)] = &[
    ("undo", "↶", "Undo"),
    ("redo", "↷", "Redo"),
    ("bold", "B", "Bold"),
    ("italic", "I", "Italic"),
    ("insertImage", "🖼", "Insert image"),
    ("justifyLeft", "⇤", "Align left"),
    ("justifyCenter", "↔", "Align center"),
    ("justifyRight", "⇥", "Align right"),
];

fn char_to_utf16(text: &str, chars: usize) -> u32 {
    text.chars().take(chars).map(|c| c.len_utf16() as u32).sum()
}

#[component]
pub fn RichEditor(editor: RwSignal<Editor>) -> impl IntoView {
    let ctx = use_app();
    // Caret position a block should take once it is (re)rendered
    let focus = RwSignal::new(None::<Selection>);
    let image_input = NodeRef::<html::Input>::new();
    let (uploading, set_uploading) = signal(false);

    let run = move |name: &'static str| {
        if name == "insertImage" {
            if let Some(input) = image_input.get() {
                input.click();
            }
            return;
        }
        let Some(command) = Command::from_name(name, None) else {
            return;
        };
        if editor.try_update(|e| e.apply(command)).unwrap_or(false) {
            focus.set(Some(editor.with_untracked(Editor::selection)));
        }
    };

    let on_image_picked = move |ev: web_sys::Event| {
        let Some(file) = selected_file(&ev) else { return };
        if let Some(input) = image_input.get() {
            input.set_value("");
        }
        set_uploading.set(true);
        spawn_local(async move {
            let uploaded = match read_upload(&file).await {
                // Editor images go up without a bearer token.
                Ok(upload) => ctx.api().upload_image(None, upload).await.map_err(|e| e.to_string()),
                Err(e) => Err(e),
            };
            match uploaded {
                Ok(response) => {
                    editor.update(|e| {
                        e.apply(Command::InsertImage(response.url));
                    });
                }
                Err(e) => {
                    log::warn!("editor image upload failed: {}", e);
                    ctx.notify(ToastKind::Error, "Failed to upload image");
                }
            }
            set_uploading.set(false);
        });
    };

    let rows = Memo::new(move |_| {
        editor.with(|e| {
            e.document()
                .blocks()
                .iter()
                .map(Block::is_image)
                .enumerate()
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="rich-editor">
            <div class="editor-toolbar">
                {TOOLBAR
                    .iter()
                    .map(|&(name, label, tooltip)| {
                        let disabled = move || match name {
                            "undo" => editor.with(|e| !e.can_undo()),
                            "redo" => editor.with(|e| !e.can_redo()),
                            "insertImage" => uploading.get(),
                            _ => false,
                        };
                        let active = move || editor.with(|e| e.active().map(Command::name) == Some(name));
                        view! {
                            <button
                                type="button"
                                title=tooltip
                                class=move || if active() { "toolbar-btn active" } else { "toolbar-btn" }
                                disabled=disabled
                                // Keep the textarea focused while clicking.
                                on:mousedown=|ev| ev.prevent_default()
                                on:click=move |_| run(name)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
                <input
                    type="file"
                    accept="image/png, image/jpeg"
                    class="hidden"
                    node_ref=image_input
                    on:change=on_image_picked
                />
            </div>

            <div class="editor-blocks">
                <For
                    each=move || rows.get()
                    key=|row| *row
                    children=move |(index, is_image)| {
                        if is_image {
                            view! { <ImageBlock editor=editor index=index /> }.into_any()
                        } else {
                            view! { <ParagraphBlock editor=editor focus=focus index=index /> }.into_any()
                        }
                    }
                />
            </div>

            <div class="editor-rendered" inner_html=move || editor.with(Editor::to_html)></div>
            <div class="editor-footer">{move || format!("{} Words", editor.with(Editor::word_count))}</div>
        </div>
    }
}

#[component]
fn ParagraphBlock(editor: RwSignal<Editor>, focus: RwSignal<Option<Selection>>, index: usize) -> impl IntoView {
    let node = NodeRef::<html::Textarea>::new();

    let text = move || editor.with(|e| e.document().block(index).map(Block::text).unwrap_or_default());
    let class = move || {
        editor.with(|e| {
            let spans = e.document().block(index).map(Block::spans).unwrap_or_default();
            let mut class = String::from("editor-block");
            if !spans.is_empty() && spans.iter().all(|s| s.style.bold) {
                class.push_str(" bold");
            }
            if !spans.is_empty() && spans.iter().all(|s| s.style.italic) {
                class.push_str(" italic");
            }
            class
        })
    };
    let style = move || {
        let align = editor.with(|e| e.document().block(index).map(Block::align).unwrap_or_default());
        format!("text-align: {}", align.css())
    };

    let sync_selection = move || {
        let Some(el) = node.get() else { return };
        let value = el.value();
        let start = el.selection_start().ok().flatten().unwrap_or(0) as usize;
        let end = el.selection_end().ok().flatten().unwrap_or(0) as usize;
        let selection = Selection::range(
            index,
            utf16_to_char_index(&value, start),
            utf16_to_char_index(&value, end),
        );
        editor.update_untracked(|e| e.select(selection));
    };

    Effect::new(move |_| {
        let Some(target) = focus.get() else { return };
        if target.block != index {
            return;
        }
        let Some(el) = node.get() else { return };
        let value = editor.with_untracked(|e| e.document().block(index).map(Block::text).unwrap_or_default());
        let _ = el.focus();
        let _ = el.set_selection_range(char_to_utf16(&value, target.start), char_to_utf16(&value, target.end));
        focus.set(None);
    });

    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        let changed = editor.try_update(|e| e.set_block_text(index, &value)).unwrap_or(false);
        // A typed newline split the paragraph; follow the caret into the new block.
        if changed && value.contains('\n') {
            focus.set(Some(editor.with_untracked(Editor::selection)));
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Backspace" || index == 0 {
            return;
        }
        let empty = editor.with_untracked(|e| e.document().block(index).is_some_and(|b| b.char_len() == 0));
        if !empty {
            return;
        }
        ev.prevent_default();
        editor.update(|e| {
            e.remove_block(index);
        });
        let previous_len = editor.with_untracked(|e| e.document().block(index - 1).map(Block::char_len).unwrap_or(0));
        focus.set(Some(Selection::caret(index - 1, previous_len)));
    };

    view! {
        <textarea
            node_ref=node
            class=class
            style=style
            rows=move || text().lines().count().max(1).to_string()
            placeholder=move || if index == 0 { "Type a content..." } else { "" }
            prop:value=text
            on:input=on_input
            on:keydown=on_keydown
            on:select=move |_| sync_selection()
            on:keyup=move |_| sync_selection()
            on:mouseup=move |_| sync_selection()
            on:focus=move |_| sync_selection()
        ></textarea>
    }
}

#[component]
fn ImageBlock(editor: RwSignal<Editor>, index: usize) -> impl IntoView {
    let url = move || {
        editor.with(|e| match e.document().block(index) {
            Some(Block::Image { url, .. }) => url.clone(),
            _ => String::new(),
        })
    };
    let style = move || {
        let align = editor.with(|e| e.document().block(index).map(Block::align).unwrap_or_default());
        format!("text-align: {}", align.css())
    };

    view! {
        <figure
            class="editor-image"
            style=style
            on:click=move |_| {
                editor.update_untracked(|e| e.select(Selection::caret(index, 0)));
            }
        >
            <img src=url alt="" />
            <button
                type="button"
                class="editor-image-remove"
                title="Remove image"
                on:click=move |ev| {
                    ev.stop_propagation();
                    editor.update(|e| {
                        e.remove_block(index);
                    });
                }
            >
                "×"
            </button>
        </figure>
    }
}
