//! Root component and batch orchestration

use crate::api::{classifier, files};
use crate::components::{
    compare_panel::ComparePanel,
    header::Header,
    notice_bar::{show_notice, NoticeBar},
    progress_bar::ProgressBar,
    upload_area::UploadArea,
};
use algomatch_common::{BatchProgress, Notice, Result, Session, SubmitPlan, ViewState};
use futures::future::{FutureExt, LocalBoxFuture};
use futures::stream::{FuturesUnordered, StreamExt};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

/// The whole client state. `web_sys::File` is not `Send`, hence local storage.
pub type SessionSignal = RwSignal<Session<File>, LocalStorage>;

enum Completion {
    Read(String, Result<String>),
    Predicted(Result<String>),
}

#[component]
pub fn App() -> impl IntoView {
    let session: SessionSignal = RwSignal::new_local(Session::new(crate::config::service_config()));
    let notice = RwSignal::new(None::<Notice>);
    let progress = RwSignal::new(None::<BatchProgress>);

    let on_submit = move || match session.try_update(|s| s.submit()) {
        Some(Ok(plan)) => {
            notice.set(None);
            progress.set(None);
            spawn_local(run_batch(session, plan, notice, progress));
        }
        Some(Err(err)) => show_notice(notice, Notice::from(err)),
        None => {}
    };

    // only panel switches re-render the body
    let view_state = Memo::new(move |_| session.with(|s| s.view()));

    view! {
        <div class="container">
            <Header config=session.with_untracked(|s| s.config().clone()) />
            <NoticeBar notice=notice />
            {move || match view_state.get() {
                ViewState::Upload => {
                    view! { <UploadArea session=session notice=notice on_submit=on_submit /> }
                        .into_any()
                }
                ViewState::Loading { .. } => view! { <ProgressBar progress=progress /> }.into_any(),
                ViewState::Compare => view! { <ComparePanel session=session /> }.into_any(),
            }}
        </div>
    }
}

/// Starts the classifier call and every read at once and feeds each
/// completion into the session as it lands.
async fn run_batch(
    session: SessionSignal,
    plan: SubmitPlan<File>,
    notice: RwSignal<Option<Notice>>,
    progress: RwSignal<Option<BatchProgress>>,
) {
    let batch = plan.batch;
    let Some(config) = session.try_with_untracked(|s| s.config().clone()) else {
        return;
    };

    let mut inflight: FuturesUnordered<LocalBoxFuture<'_, Completion>> = FuturesUnordered::new();
    inflight.push(
        async { Completion::Predicted(classifier::predict(&config, &plan.files).await) }
            .boxed_local(),
    );
    for file in &plan.files {
        inflight.push(
            async move { Completion::Read(file.name.clone(), files::read_text(&file.handle).await) }
                .boxed_local(),
        );
    }

    while let Some(completion) = inflight.next().await {
        let step: Option<Result<BatchProgress>> = match completion {
            Completion::Read(name, result) => {
                session.try_update(|s| Ok(s.content_read(batch, &name, result)))
            }
            Completion::Predicted(Ok(body)) => {
                session.try_update(|s| s.results_received(batch, &body))
            }
            Completion::Predicted(Err(err)) => session.try_update(|s| {
                s.submission_failed(batch, &err);
                Err(err)
            }),
        };

        match step {
            Some(Ok(waiting @ BatchProgress::Waiting { .. })) => progress.set(Some(waiting)),
            Some(Ok(BatchProgress::Committed)) => {
                progress.set(None);
                return;
            }
            Some(Err(err)) => {
                progress.set(None);
                show_notice(notice, Notice::from(err));
                return;
            }
            // abandoned by Back, or the app was torn down
            Some(Ok(BatchProgress::Stale)) | None => {
                log::debug!("{}: stopped listening", batch);
                return;
            }
        }
    }
}
