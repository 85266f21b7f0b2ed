//! Progress bar shown while a batch is in flight

use algomatch_common::BatchProgress;
use leptos::prelude::*;

/// Share of the batch finished: every read plus the classifier response.
fn fraction(progress: Option<BatchProgress>) -> f64 {
    match progress {
        Some(BatchProgress::Waiting {
            reads_done,
            reads_total,
            has_results,
        }) => {
            let done = reads_done + usize::from(has_results);
            done as f64 / (reads_total + 1) as f64
        }
        Some(BatchProgress::Committed) => 1.0,
        _ => 0.0,
    }
}

fn status_text(progress: Option<BatchProgress>) -> String {
    match progress {
        Some(BatchProgress::Waiting {
            reads_done,
            reads_total,
            has_results: false,
        }) => format!("Waiting for the classifier... ({}/{} files read)", reads_done, reads_total),
        Some(BatchProgress::Waiting {
            reads_done,
            reads_total,
            has_results: true,
        }) => format!("Reading files... {}/{}", reads_done, reads_total),
        _ => "Submitting...".to_string(),
    }
}

#[component]
pub fn ProgressBar(progress: RwSignal<Option<BatchProgress>>) -> impl IntoView {
    view! {
        <div class="progress-container">
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {:.0}%", fraction(progress.get()) * 100.0)
                />
            </div>
            <p class="progress-text">{move || status_text(progress.get())}</p>
        </div>
    }
}
