//! Batch driver
//!
//! Runs one submission end to end: the classifier call and every local
//! read start together and finish in any order. Each completion is fed
//! to the session tagged with the batch it belongs to.

use crate::client::Classifier;
use crate::reader::read_text;
use algomatch_common::{BatchProgress, Result, Session};
use futures::future::{FutureExt, LocalBoxFuture};
use futures::stream::{FuturesUnordered, StreamExt};
use std::path::PathBuf;

enum Completion {
    Read(String, Result<String>),
    Predicted(Result<String>),
}

/// Submits the session's upload set and drives it to completion.
///
/// # Returns
/// * `Ok(BatchProgress::Committed)` - the session is now in Compare
/// * `Err(_)` - nothing was submitted, or the batch was aborted. Uploads and
///   previously committed results are left in place.
pub async fn run_batch<C>(session: &mut Session<PathBuf>, classifier: &C) -> Result<BatchProgress>
where
    C: Classifier<PathBuf>,
{
    let plan = session.submit()?;
    let batch = plan.batch;

    let mut inflight: FuturesUnordered<LocalBoxFuture<'_, Completion>> = FuturesUnordered::new();
    inflight.push(
        async { Completion::Predicted(classifier.predict(&plan.files).await) }.boxed_local(),
    );
    for file in &plan.files {
        inflight.push(
            async move { Completion::Read(file.name.clone(), read_text(&file.handle).await) }
                .boxed_local(),
        );
    }

    let mut progress = BatchProgress::Stale;
    while let Some(completion) = inflight.next().await {
        progress = match completion {
            Completion::Read(name, result) => session.content_read(batch, &name, result),
            Completion::Predicted(Ok(body)) => session.results_received(batch, &body)?,
            Completion::Predicted(Err(err)) => {
                session.submission_failed(batch, &err);
                return Err(err);
            }
        };
        if progress == BatchProgress::Committed {
            break;
        }
    }
    Ok(progress)
}
