//! Upload area: drop zone, picker, selected file list and submit button

use crate::api::files::collect_files;
use crate::app::SessionSignal;
use crate::components::notice_bar::show_notice;
use algomatch_common::{FileKind, Notice};
use leptos::html::Input;
use leptos::prelude::*;
use web_sys::{DragEvent, FileList, HtmlInputElement};

#[component]
pub fn UploadArea<F>(
    session: SessionSignal,
    notice: RwSignal<Option<Notice>>,
    on_submit: F,
) -> impl IntoView
where
    F: Fn() + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref = NodeRef::<Input>::new();

    let add_files = move |files: FileList| {
        let picked = collect_files(&files);
        let Some(outcome) = session.try_update(|s| s.add_files(picked)) else {
            return;
        };
        if let Some(rejected) = Notice::from_rejections(&outcome.rejected) {
            show_notice(notice, rejected);
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);
        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            add_files(files);
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_change = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        if let Some(files) = input.files() {
            add_files(files);
        }
        // picking the same file again must fire another change
        input.set_value("");
    };

    let file_names = move || {
        session.with(|s| s.uploads().names().map(str::to_string).collect::<Vec<_>>())
    };
    // an empty set still submits so the session can report it
    let submit_disabled = move || session.with(|s| s.is_busy());

    view! {
        <div class="upload-panel">
            <input
                type="file"
                class="hidden-input"
                multiple=true
                accept=FileKind::ACCEPT
                node_ref=input_ref
                on:change=on_change
            />
            <div
                class=move || if is_dragover.get() { "upload-area dragover" } else { "upload-area" }
                on:drop=on_drop
                on:dragover=on_dragover
                on:dragleave=move |_: DragEvent| set_is_dragover.set(false)
                on:click=move |_| {
                    if let Some(input) = input_ref.get() {
                        input.click();
                    }
                }
            >
                <div class="upload-icon">"📄"</div>
                <p>"Drop source files here or click to choose"</p>
                <p class="text-muted">"Accepted: .txt, .py, .c"</p>
            </div>

            <ul class="file-list">
                <For
                    each=file_names
                    key=|name| name.clone()
                    children=move |name| {
                        let target = name.clone();
                        view! {
                            <li class="file-item">
                                <span class="file-name">{name}</span>
                                <button
                                    class="file-remove"
                                    title="Remove"
                                    on:click=move |_| {
                                        session.update(|s| {
                                            s.remove_file(&target);
                                        });
                                    }
                                >
                                    "×"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>

            <button
                class="btn btn-primary"
                disabled=submit_disabled
                on:click=move |_| on_submit()
            >
                "Compare"
            </button>
        </div>
    }
}
