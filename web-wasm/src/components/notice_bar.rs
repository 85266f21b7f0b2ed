//! Notice bar

use algomatch_common::{Notice, NoticeLevel};
use gloo::timers::callback::Timeout;
use leptos::prelude::*;

const DISMISS_AFTER_MS: u32 = 6_000;

/// Replaces the current notice. Info and warning notices clear themselves
/// unless something newer replaced them first; errors stay until dismissed.
pub fn show_notice(notice: RwSignal<Option<Notice>>, next: Notice) {
    let sticky = next.level == NoticeLevel::Error;
    notice.set(Some(next.clone()));
    if sticky {
        return;
    }
    Timeout::new(DISMISS_AFTER_MS, move || {
        if notice.get_untracked().as_ref() == Some(&next) {
            notice.set(None);
        }
    })
    .forget();
}

#[component]
pub fn NoticeBar(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            view! {
                <div class=format!("notice notice-{}", n.level.as_str()) role="status">
                    <span class="notice-message">{n.message}</span>
                    <button class="notice-close" on:click=move |_| notice.set(None)>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
