//! Session state container
//!
//! Owns every piece of client state and exposes one transition per user
//! action or asynchronous completion. Nothing here does I/O: the caller
//! performs the reads and the network call described by [`SubmitPlan`] and
//! feeds the completions back in, tagged with their [`BatchId`].
//!
//! An in-flight batch fills a private staging area. It replaces the visible
//! content and results in one step once both the reads and the response
//! have arrived, so a failure never disturbs what is already on screen.

use crate::config::ServiceConfig;
use crate::content::{ContentEntry, LocalContentCache, ReadProgress};
use crate::cursor::{CursorPosition, NavigationCursor};
use crate::error::{Error, Result};
use crate::matrix::ResultMatrix;
use crate::scroll::{Pane, ScrollMetrics, ScrollSync};
use crate::types::{BatchId, CandidateMatch, UploadedFile};
use crate::upload::{AddOutcome, UploadSet};
use crate::view::ViewState;

/// Work the caller must start after a successful [`Session::submit`].
#[derive(Debug, Clone)]
pub struct SubmitPlan<H> {
    pub batch: BatchId,
    pub files: Vec<UploadedFile<H>>,
}

/// State of a batch after feeding it a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchProgress {
    /// The completion belongs to a batch that is no longer current.
    Stale,
    Waiting {
        reads_done: usize,
        reads_total: usize,
        has_results: bool,
    },
    /// Content and results were swapped in; the view is now Compare.
    Committed,
}

#[derive(Debug, Clone)]
struct PendingBatch {
    id: BatchId,
    content: LocalContentCache,
    matrix: Option<ResultMatrix>,
}

/// Everything the compare panel needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareView<'a> {
    pub file_name: &'a str,
    pub language: Option<&'a str>,
    /// `None` renders as "no content available".
    pub content: Option<&'a str>,
    pub read_error: Option<&'a str>,
    pub candidates: &'a [CandidateMatch],
    /// `None` renders as the "no match" placeholder.
    pub current: Option<&'a CandidateMatch>,
    pub position: CursorPosition,
}

#[derive(Debug, Clone)]
pub struct Session<H> {
    config: ServiceConfig,
    uploads: UploadSet<H>,
    content: LocalContentCache,
    matrix: ResultMatrix,
    cursor: NavigationCursor,
    view: ViewState,
    scroll: ScrollSync,
    pending: Option<PendingBatch>,
    last_batch: BatchId,
}

impl<H> Session<H> {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config,
            uploads: UploadSet::new(),
            content: LocalContentCache::new(),
            matrix: ResultMatrix::new(),
            cursor: NavigationCursor::default(),
            view: ViewState::default(),
            scroll: ScrollSync::new(),
            pending: None,
            last_batch: BatchId::default(),
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn uploads(&self) -> &UploadSet<H> {
        &self.uploads
    }

    pub fn content(&self) -> &LocalContentCache {
        &self.content
    }

    pub fn matrix(&self) -> &ResultMatrix {
        &self.matrix
    }

    pub fn cursor(&self) -> &NavigationCursor {
        &self.cursor
    }

    /// True while a batch is in flight; the submit button is disabled.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    // =============================================
    // Upload panel
    // =============================================

    pub fn add_files(&mut self, files: impl IntoIterator<Item = UploadedFile<H>>) -> AddOutcome {
        self.uploads.add(files)
    }

    pub fn remove_file(&mut self, name: &str) -> bool {
        self.uploads.remove(name)
    }

    /// Starts a new batch from the current upload set.
    ///
    /// # Returns
    /// * `Ok(SubmitPlan)` - the files to read and send, tagged with the batch id
    /// * `Err(Error::EmptyInput)` - nothing selected; no call must be made
    /// * `Err(Error::SubmissionInFlight)` - another batch is still running
    pub fn submit(&mut self) -> Result<SubmitPlan<H>>
    where
        H: Clone,
    {
        self.uploads.ensure_submittable()?;
        let batch = self.last_batch.next();
        self.view = self.view.start(batch)?;
        self.last_batch = batch;

        let files = self.uploads.files().to_vec();
        let mut content = LocalContentCache::new();
        content.begin(batch, files.iter().map(|f| f.name.clone()).collect());
        self.pending = Some(PendingBatch {
            id: batch,
            content,
            matrix: None,
        });

        log::info!("{}: submitting {} files", batch, files.len());
        Ok(SubmitPlan { batch, files })
    }

    // =============================================
    // Asynchronous completions
    // =============================================

    /// Records one finished local read.
    pub fn content_read(
        &mut self,
        batch: BatchId,
        name: &str,
        result: Result<String>,
    ) -> BatchProgress {
        let Some(pending) = self.pending_for(batch) else {
            log::debug!("ignoring read of {} for stale {}", name, batch);
            return BatchProgress::Stale;
        };
        let result = result.map_err(|e| e.to_string());
        if pending.content.record(batch, name, result) == ReadProgress::Ignored {
            log::debug!("{}: duplicate or unknown read of {}", batch, name);
        }
        self.try_commit()
    }

    /// Parses and stages the classifier response.
    ///
    /// A malformed body aborts the batch: the staging area is dropped, the
    /// view returns to where it was and the committed results stay as they
    /// were.
    pub fn results_received(&mut self, batch: BatchId, body: &str) -> Result<BatchProgress> {
        let top_k = self.config.top_k;
        let Some(pending) = self.pending_for(batch) else {
            log::debug!("ignoring response for stale {}", batch);
            return Ok(BatchProgress::Stale);
        };

        let mut matrix = ResultMatrix::new();
        if let Err(err) = matrix.ingest(batch, body, top_k) {
            log::warn!("{}: {}", batch, err);
            self.abort(batch);
            return Err(err);
        }
        pending.matrix = Some(matrix);
        Ok(self.try_commit())
    }

    /// The network call failed. Uploads and committed results are kept so
    /// the user can retry without picking the files again.
    pub fn submission_failed(&mut self, batch: BatchId, error: &Error) -> BatchProgress {
        if self.pending_for(batch).is_none() {
            return BatchProgress::Stale;
        }
        log::warn!("{}: submission failed: {}", batch, error);
        self.abort(batch);
        BatchProgress::Stale
    }

    fn pending_for(&mut self, batch: BatchId) -> Option<&mut PendingBatch> {
        self.pending.as_mut().filter(|p| p.id == batch)
    }

    fn abort(&mut self, batch: BatchId) {
        self.pending = None;
        self.view = self.view.fail(batch);
    }

    fn try_commit(&mut self) -> BatchProgress {
        let Some(pending) = self.pending.as_ref() else {
            return BatchProgress::Stale;
        };
        if !pending.content.is_ready() || pending.matrix.is_none() {
            return BatchProgress::Waiting {
                reads_done: pending.content.completed(),
                reads_total: pending.content.order().len(),
                has_results: pending.matrix.is_some(),
            };
        }

        let Some(PendingBatch {
            id,
            content,
            matrix: Some(matrix),
        }) = self.pending.take()
        else {
            return BatchProgress::Stale;
        };

        let mut matrix = matrix;
        // the file axis follows submission order, not response order
        matrix.arrange(content.order());
        self.content = content;
        self.matrix = matrix;
        self.cursor = NavigationCursor::at_start(&self.matrix);
        self.scroll.reset();
        self.view = self.view.complete(id);
        log::info!("{}: comparing {} files", id, self.matrix.len());
        BatchProgress::Committed
    }

    // =============================================
    // Compare panel
    // =============================================

    pub fn next_file(&mut self) {
        if self.view == ViewState::Compare {
            self.cursor.next_file(&self.matrix);
            self.scroll.reset();
        }
    }

    pub fn previous_file(&mut self) {
        if self.view == ViewState::Compare {
            self.cursor.previous_file(&self.matrix);
            self.scroll.reset();
        }
    }

    pub fn select_file(&mut self, name: &str) {
        if self.view == ViewState::Compare && self.cursor.select_file(&self.matrix, name) {
            self.scroll.reset();
        }
    }

    pub fn next_candidate(&mut self) {
        if self.view == ViewState::Compare {
            self.cursor.next_candidate(&self.matrix);
        }
    }

    pub fn previous_candidate(&mut self) {
        if self.view == ViewState::Compare {
            self.cursor.previous_candidate(&self.matrix);
        }
    }

    /// Scroll event on one of the two panes; see [`ScrollSync::on_scroll`].
    pub fn on_scroll(
        &mut self,
        pane: Pane,
        scrolled: ScrollMetrics,
        follower: ScrollMetrics,
    ) -> Option<f64> {
        self.scroll.on_scroll(pane, scrolled, follower)
    }

    /// Full reset to the Upload panel. Anything still in flight becomes stale.
    pub fn back(&mut self) {
        if let Some(pending) = self.pending.take() {
            log::debug!("{}: discarded by back", pending.id);
        }
        self.uploads.clear();
        self.content.clear();
        self.matrix.clear();
        self.cursor = NavigationCursor::default();
        self.scroll.reset();
        self.view = self.view.back();
    }

    /// Snapshot for the compare panel, or `None` outside Compare.
    pub fn compare_view(&self) -> Option<CompareView<'_>> {
        if self.view != ViewState::Compare {
            return None;
        }
        let file_name = self.cursor.file_key()?;
        let entry = self.matrix.entry(file_name)?;
        let position = self.cursor.position(&self.matrix)?;
        let read_error = match self.content.get(file_name) {
            Some(ContentEntry::Failed(reason)) => Some(reason.as_str()),
            _ => None,
        };

        Some(CompareView {
            file_name,
            language: entry.language.as_deref(),
            content: self.content.text(file_name),
            read_error,
            candidates: &entry.candidates,
            current: self.cursor.current(&self.matrix),
            position,
        })
    }
}
