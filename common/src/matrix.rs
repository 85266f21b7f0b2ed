//! Ranked results per submitted file

use crate::error::Result;
use crate::parser::{parse_predict_response, FileMatches};
use crate::types::{BatchId, CandidateMatch};
use std::collections::HashMap;

/// Per-file ranked candidates for one batch.
///
/// Entries keep navigation order in a `Vec` (response order until
/// [`ResultMatrix::arrange`] is called); `index` is only a lookup aid.
#[derive(Debug, Clone, Default)]
pub struct ResultMatrix {
    batch: Option<BatchId>,
    entries: Vec<FileMatches>,
    index: HashMap<String, usize>,
}

impl ResultMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a matrix from parsed results, truncating each list to `top_k`.
    /// A repeated file name keeps its first entry.
    pub fn from_files(batch: BatchId, files: Vec<FileMatches>, top_k: usize) -> Self {
        let mut matrix = Self {
            batch: Some(batch),
            ..Self::default()
        };

        for mut file in files {
            if matrix.index.contains_key(&file.file_name) {
                log::warn!("{}: duplicate result for {}, keeping the first", batch, file.file_name);
                continue;
            }
            file.candidates.truncate(top_k);
            matrix.index.insert(file.file_name.clone(), matrix.entries.len());
            matrix.entries.push(file);
        }

        matrix
    }

    /// Replaces the whole matrix with the parsed `body`.
    ///
    /// On any parse error the matrix is left exactly as it was.
    pub fn ingest(&mut self, batch: BatchId, body: &str, top_k: usize) -> Result<()> {
        let files = parse_predict_response(body)?;
        *self = Self::from_files(batch, files, top_k);
        log::debug!("{}: ingested results for {} files", batch, self.entries.len());
        Ok(())
    }

    pub fn batch(&self) -> Option<BatchId> {
        self.batch
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// File names in navigation order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.file_name.as_str())
    }

    pub fn key_at(&self, position: usize) -> Option<&str> {
        self.entries.get(position).map(|e| e.file_name.as_str())
    }

    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn entry(&self, name: &str) -> Option<&FileMatches> {
        self.position_of(name).map(|i| &self.entries[i])
    }

    /// Ranked candidates for `name`; empty when the file is unknown.
    pub fn candidates(&self, name: &str) -> &[CandidateMatch] {
        self.entry(name).map(|e| e.candidates.as_slice()).unwrap_or(&[])
    }

    /// Puts the files named in `order` first, in that order. Files the
    /// service returned but `order` does not name follow in response order.
    pub fn arrange<S: AsRef<str>>(&mut self, order: &[S]) {
        let mut slots: Vec<Option<FileMatches>> =
            std::mem::take(&mut self.entries).into_iter().map(Some).collect();
        let mut arranged = Vec::with_capacity(slots.len());
        for name in order {
            if let Some(entry) = self
                .index
                .get(name.as_ref())
                .and_then(|&i| slots[i].take())
            {
                arranged.push(entry);
            }
        }
        arranged.extend(slots.into_iter().flatten());

        self.index = arranged
            .iter()
            .enumerate()
            .map(|(i, e)| (e.file_name.clone(), i))
            .collect();
        self.entries = arranged;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
