//! Two-axis navigation cursor
//!
//! File axis: which submitted file is shown. Candidate axis: which ranked
//! match of that file is shown. Both wrap around. Changing the file always
//! resets the candidate index to 0.

use crate::matrix::ResultMatrix;
use crate::types::CandidateMatch;

/// 1-based position, for the "2/5" labels next to the arrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPosition {
    pub file: usize,
    pub files: usize,
    /// `None` when the current file has no candidates.
    pub candidate: Option<usize>,
    pub candidates: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationCursor {
    file_key: Option<String>,
    candidate: usize,
}

impl NavigationCursor {
    /// Cursor on the first file and first candidate, or empty.
    pub fn at_start(matrix: &ResultMatrix) -> Self {
        Self {
            file_key: matrix.key_at(0).map(str::to_string),
            candidate: 0,
        }
    }

    pub fn file_key(&self) -> Option<&str> {
        self.file_key.as_deref()
    }

    /// Raw candidate index. Meaningless when the current list is empty.
    pub fn candidate_index(&self) -> usize {
        self.candidate
    }

    /// Re-establishes the invariants against `matrix`: the file key must be
    /// present and the candidate index inside the current list.
    pub fn sync(&mut self, matrix: &ResultMatrix) {
        let present = self.file_key.as_deref().is_some_and(|k| matrix.contains(k));
        if !present {
            *self = Self::at_start(matrix);
            return;
        }
        if self.candidate >= self.candidate_count(matrix) {
            self.candidate = 0;
        }
    }

    pub fn next_file(&mut self, matrix: &ResultMatrix) {
        self.move_file(matrix, true);
    }

    pub fn previous_file(&mut self, matrix: &ResultMatrix) {
        self.move_file(matrix, false);
    }

    /// Jumps to `name`. Unknown names leave the cursor alone.
    pub fn select_file(&mut self, matrix: &ResultMatrix, name: &str) -> bool {
        if !matrix.contains(name) {
            return false;
        }
        self.file_key = Some(name.to_string());
        self.candidate = 0;
        true
    }

    pub fn next_candidate(&mut self, matrix: &ResultMatrix) {
        self.sync(matrix);
        self.candidate = wrap(self.candidate, self.candidate_count(matrix), true);
    }

    pub fn previous_candidate(&mut self, matrix: &ResultMatrix) {
        self.sync(matrix);
        self.candidate = wrap(self.candidate, self.candidate_count(matrix), false);
    }

    /// Candidate under the cursor; `None` renders as the "no match" placeholder.
    pub fn current<'m>(&self, matrix: &'m ResultMatrix) -> Option<&'m CandidateMatch> {
        let key = self.file_key.as_deref()?;
        matrix.candidates(key).get(self.candidate)
    }

    pub fn position(&self, matrix: &ResultMatrix) -> Option<CursorPosition> {
        let key = self.file_key.as_deref()?;
        let file = matrix.position_of(key)?;
        let candidates = matrix.candidates(key).len();
        Some(CursorPosition {
            file: file + 1,
            files: matrix.len(),
            candidate: (candidates > 0).then_some(self.candidate + 1),
            candidates,
        })
    }

    fn move_file(&mut self, matrix: &ResultMatrix, forward: bool) {
        self.sync(matrix);
        let Some(current) = self.file_key.as_deref().and_then(|k| matrix.position_of(k)) else {
            return;
        };
        let next = wrap(current, matrix.len(), forward);
        self.file_key = matrix.key_at(next).map(str::to_string);
        self.candidate = 0;
    }

    fn candidate_count(&self, matrix: &ResultMatrix) -> usize {
        self.file_key
            .as_deref()
            .map(|k| matrix.candidates(k).len())
            .unwrap_or(0)
    }
}

fn wrap(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}
