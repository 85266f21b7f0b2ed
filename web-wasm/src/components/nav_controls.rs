//! Navigation controls for the compare panel
//!
//! File axis: arrows, "i/n" label and a drop-down. Candidate axis: arrows
//! and label. Both axes wrap.

use crate::app::SessionSignal;
use algomatch_common::CursorPosition;
use leptos::prelude::*;

fn file_label(position: Option<CursorPosition>) -> String {
    match position {
        Some(p) => format!("{}/{}", p.file, p.files),
        None => "0/0".to_string(),
    }
}

fn candidate_label(position: Option<CursorPosition>) -> String {
    match position {
        Some(CursorPosition {
            candidate: Some(c),
            candidates,
            ..
        }) => format!("{}/{}", c, candidates),
        _ => "0/0".to_string(),
    }
}

#[component]
pub fn NavControls(
    session: SessionSignal,
    position: Memo<Option<CursorPosition>>,
    current_file: Memo<String>,
) -> impl IntoView {
    let file_names = Memo::new(move |_| {
        session.with(|s| s.matrix().keys().map(str::to_string).collect::<Vec<_>>())
    });
    let no_candidates = move || matches!(position.get(), Some(p) if p.candidates == 0);

    view! {
        <nav class="nav-controls">
            <div class="nav-axis">
                <span class="nav-title">"File"</span>
                <button class="nav-arrow" on:click=move |_| session.update(|s| s.previous_file())>
                    "◀"
                </button>
                <span class="nav-label">{move || file_label(position.get())}</span>
                <button class="nav-arrow" on:click=move |_| session.update(|s| s.next_file())>
                    "▶"
                </button>
                <select
                    class="file-select"
                    prop:value=move || current_file.get()
                    on:change=move |ev| {
                        let name = event_target_value(&ev);
                        session.update(|s| s.select_file(&name));
                    }
                >
                    <For
                        each=move || file_names.get()
                        key=|name| name.clone()
                        children=move |name| {
                            let value = name.clone();
                            view! { <option value=value>{name}</option> }
                        }
                    />
                </select>
            </div>

            <div class="nav-axis">
                <span class="nav-title">"Match"</span>
                <button
                    class="nav-arrow"
                    disabled=no_candidates
                    on:click=move |_| session.update(|s| s.previous_candidate())
                >
                    "◀"
                </button>
                <span class="nav-label">{move || candidate_label(position.get())}</span>
                <button
                    class="nav-arrow"
                    disabled=no_candidates
                    on:click=move |_| session.update(|s| s.next_candidate())
                >
                    "▶"
                </button>
            </div>

            <button class="btn btn-secondary" on:click=move |_| session.update(|s| s.back())>
                "Back"
            </button>
        </nav>
    }
}
