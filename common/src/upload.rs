//! Files waiting to be submitted

use crate::error::{Error, Result};
use crate::types::UploadedFile;

/// Outcome of [`UploadSet::add`]. Rejections are warnings, not failures.
#[derive(Debug, Default, PartialEq)]
pub struct AddOutcome {
    pub accepted: Vec<String>,
    pub rejected: Vec<Error>,
}

/// User-curated list of files, in the order they were added.
///
/// Names are unique: a second file with a name already in the set is
/// rejected with [`Error::DuplicateFile`].
#[derive(Debug, Clone)]
pub struct UploadSet<H> {
    files: Vec<UploadedFile<H>>,
}

impl<H> Default for UploadSet<H> {
    fn default() -> Self {
        Self { files: Vec::new() }
    }
}

impl<H> UploadSet<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the files that pass the type filter and are not already present.
    pub fn add(&mut self, incoming: impl IntoIterator<Item = UploadedFile<H>>) -> AddOutcome {
        let mut outcome = AddOutcome::default();

        for file in incoming {
            if file.kind().is_none() {
                log::warn!("rejected {} (type {:?})", file.name, file.mime);
                outcome.rejected.push(Error::UnsupportedFileType(file.name));
                continue;
            }
            if self.contains(&file.name) {
                log::warn!("rejected duplicate {}", file.name);
                outcome.rejected.push(Error::DuplicateFile(file.name));
                continue;
            }
            outcome.accepted.push(file.name.clone());
            self.files.push(file);
        }

        outcome
    }

    /// Removes the first entry named `name`. Returns whether anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.files.iter().position(|f| f.name == name) {
            Some(index) => {
                self.files.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files.iter().any(|f| f.name == name)
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn files(&self) -> &[UploadedFile<H>] {
        &self.files
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.name.as_str())
    }

    /// Fails with [`Error::EmptyInput`] when there is nothing to submit.
    pub fn ensure_submittable(&self) -> Result<()> {
        if self.files.is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(())
    }
}
