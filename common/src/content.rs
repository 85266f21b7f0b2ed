//! Local content cache
//!
//! Holds the decoded text of every file in one batch. Reads finish in any
//! order; the cache is keyed by name so the final state does not depend on
//! that order. The cache flips to ready exactly once, when the number of
//! completed reads reaches the batch size.

use crate::types::BatchId;
use std::collections::HashMap;

/// Outcome of one file read.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentEntry {
    Text(String),
    Failed(String),
}

/// What recording a completion did to the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadProgress {
    /// Stale batch, unknown name, or a name already recorded.
    Ignored,
    Pending { done: usize, total: usize },
    /// The completion that closed the batch. Returned once per batch.
    Ready,
}

#[derive(Debug, Clone, Default)]
pub struct LocalContentCache {
    batch: Option<BatchId>,
    order: Vec<String>,
    entries: HashMap<String, ContentEntry>,
    completed: usize,
    ready: bool,
}

impl LocalContentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking `batch`, dropping whatever was cached before.
    ///
    /// `names` is the submission order; it decides which file is shown
    /// first, independent of which read finishes first.
    pub fn begin(&mut self, batch: BatchId, names: Vec<String>) {
        log::debug!("{}: expecting {} reads", batch, names.len());
        self.batch = Some(batch);
        self.ready = names.is_empty();
        self.order = names;
        self.entries.clear();
        self.completed = 0;
    }

    /// Records one finished read. Failed reads count toward completion.
    pub fn record(
        &mut self,
        batch: BatchId,
        name: &str,
        result: Result<String, String>,
    ) -> ReadProgress {
        if self.batch != Some(batch) {
            log::warn!("dropping read of {} from stale {}", name, batch);
            return ReadProgress::Ignored;
        }
        if self.ready || self.entries.contains_key(name) || !self.order.iter().any(|n| n == name) {
            return ReadProgress::Ignored;
        }

        let entry = match result {
            Ok(text) => ContentEntry::Text(text),
            Err(reason) => {
                log::warn!("{}: read of {} failed: {}", batch, name, reason);
                ContentEntry::Failed(reason)
            }
        };
        self.entries.insert(name.to_string(), entry);
        self.completed += 1;

        if self.completed == self.order.len() {
            self.ready = true;
            log::debug!("{}: content ready", batch);
            ReadProgress::Ready
        } else {
            ReadProgress::Pending {
                done: self.completed,
                total: self.order.len(),
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn batch(&self) -> Option<BatchId> {
        self.batch
    }

    pub fn get(&self, name: &str) -> Option<&ContentEntry> {
        self.entries.get(name)
    }

    /// Text of `name`, or `None` if it was never read or the read failed.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.entries.get(name) {
            Some(ContentEntry::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// File names in submission order, independent of read completion.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
