//! Compare panel: source file on the left, ranked matches on the right
//!
//! The two panes scroll together proportionally. Scroll bookkeeping goes
//! through the session untracked so a scroll never re-renders the panes.

use crate::app::SessionSignal;
use crate::components::nav_controls::NavControls;
use algomatch_common::{CandidateMatch, CursorPosition, Pane, ScrollMetrics};
use leptos::html::Div;
use leptos::prelude::*;
use web_sys::HtmlDivElement;

/// Owned copy of what the panel shows for the current cursor.
#[derive(Debug, Clone, PartialEq, Default)]
struct Snapshot {
    file_name: String,
    language: Option<String>,
    content: Option<String>,
    read_error: Option<String>,
    candidates: Vec<CandidateMatch>,
    position: Option<CursorPosition>,
}

impl Snapshot {
    fn current(&self) -> Option<&CandidateMatch> {
        let index = self.position?.candidate?.checked_sub(1)?;
        self.candidates.get(index)
    }
}

fn metrics(el: &HtmlDivElement) -> ScrollMetrics {
    ScrollMetrics::new(
        f64::from(el.scroll_top()),
        f64::from(el.scroll_height()),
        f64::from(el.client_height()),
    )
}

#[component]
pub fn ComparePanel(session: SessionSignal) -> impl IntoView {
    let snapshot = Memo::new(move |_| {
        session.with(|s| {
            s.compare_view()
                .map(|v| Snapshot {
                    file_name: v.file_name.to_string(),
                    language: v.language.map(str::to_string),
                    content: v.content.map(str::to_string),
                    read_error: v.read_error.map(str::to_string),
                    candidates: v.candidates.to_vec(),
                    position: Some(v.position),
                })
                .unwrap_or_default()
        })
    });
    let position = Memo::new(move |_| snapshot.with(|s| s.position));
    let current_file = Memo::new(move |_| snapshot.with(|s| s.file_name.clone()));

    let source_ref = NodeRef::<Div>::new();
    let matches_ref = NodeRef::<Div>::new();

    let sync = move |pane: Pane| {
        let (Some(source), Some(matches)) = (source_ref.get(), matches_ref.get()) else {
            return;
        };
        let (scrolled, follower) = match pane {
            Pane::Source => (&source, &matches),
            Pane::Matches => (&matches, &source),
        };
        let target = session
            .try_update_untracked(|s| s.on_scroll(pane, metrics(scrolled), metrics(follower)))
            .flatten();
        if let Some(top) = target {
            follower.set_scroll_top(top.round() as i32);
        }
    };

    // a new file starts both panes at the top
    Effect::new(move |_| {
        current_file.track();
        for pane in [source_ref.get(), matches_ref.get()].into_iter().flatten() {
            pane.set_scroll_top(0);
        }
    });

    view! {
        <div class="compare">
            <NavControls session=session position=position current_file=current_file />

            <div class="panes">
                <section class="pane pane-source">
                    <h2 class="pane-title">
                        {move || current_file.get()}
                        {move || {
                            snapshot
                                .with(|s| s.language.clone())
                                .map(|lang| view! { <span class="lang-badge">{lang}</span> })
                        }}
                    </h2>
                    <div class="pane-body" node_ref=source_ref on:scroll=move |_| sync(Pane::Source)>
                        {move || match snapshot.with(|s| s.content.clone()) {
                            Some(code) => view! { <pre><code>{code}</code></pre> }.into_any(),
                            None => {
                                let reason = snapshot.with(|s| s.read_error.clone());
                                view! {
                                    <p class="placeholder">
                                        "No content available"
                                        {reason.map(|r| format!(" ({})", r))}
                                    </p>
                                }
                                    .into_any()
                            }
                        }}
                    </div>
                </section>

                <section class="pane pane-matches">
                    <h2 class="pane-title">
                        {move || {
                            snapshot.with(|s| match s.current() {
                                Some(m) => format!("{} ({})", m.name, m.percent_label()),
                                None => "No match".to_string(),
                            })
                        }}
                    </h2>
                    <div class="pane-body" node_ref=matches_ref on:scroll=move |_| sync(Pane::Matches)>
                        <ol class="candidates">
                            {move || {
                                snapshot.with(|s| {
                                    let active = s.position.and_then(|p| p.candidate);
                                    s.candidates
                                        .iter()
                                        .enumerate()
                                        .map(|(i, m)| {
                                            let class = if active == Some(i + 1) {
                                                "candidate active"
                                            } else {
                                                "candidate"
                                            };
                                            view! {
                                                <li class=class>
                                                    <span class="candidate-name">{m.name.clone()}</span>
                                                    <span class="candidate-prob">{m.percent_label()}</span>
                                                    {m.language.clone().map(|l| view! { <span class="lang-badge">{l}</span> })}
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                })
                            }}
                        </ol>
                    </div>
                </section>
            </div>
        </div>
    }
}
