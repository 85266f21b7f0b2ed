//! Core value types
//!
//! Shared between the native driver and the browser client:
//! - FileKind / UploadedFile: what the user picked
//! - CandidateMatch: one ranked entry from the classifier
//! - BatchId: identity of one submission
//! - StoredNote / StoredUpload: records kept by the remote service

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The service stores notes in a 30-character column.
pub const NOTE_MAX_CHARS: usize = 30;

/// Accepted source kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FileKind {
    PlainText,
    Python,
    C,
}

impl FileKind {
    /// Suffixes accepted by the file picker (`accept` attribute).
    pub const ACCEPT: &'static str = ".txt,.py,.c,text/plain,text/x-python,text/x-csrc";

    /// Detects the kind from the file name suffix, falling back to the
    /// declared MIME type. Returns `None` for anything outside the allow-list.
    pub fn detect(name: &str, mime: &str) -> Option<Self> {
        Self::from_suffix(name).or_else(|| Self::from_mime(mime))
    }

    fn from_suffix(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "txt" => Some(FileKind::PlainText),
            "py" => Some(FileKind::Python),
            "c" => Some(FileKind::C),
            _ => None,
        }
    }

    fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or("").trim();
        match essence.to_ascii_lowercase().as_str() {
            "text/plain" => Some(FileKind::PlainText),
            "text/x-python" | "text/x-script.python" | "application/x-python-code" => {
                Some(FileKind::Python)
            }
            "text/x-c" | "text/x-csrc" => Some(FileKind::C),
            _ => None,
        }
    }
}

/// A file picked by the user, before submission.
///
/// `H` is the platform handle: `web_sys::File` in the browser, a path on
/// the native side.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile<H> {
    pub name: String,
    pub mime: String,
    pub handle: H,
}

impl<H> UploadedFile<H> {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, handle: H) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            handle,
        }
    }

    pub fn kind(&self) -> Option<FileKind> {
        FileKind::detect(&self.name, &self.mime)
    }
}

/// One ranked candidate for a submitted file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateMatch {
    pub name: String,
    pub probability: f64,
    #[serde(default)]
    pub language: Option<String>,
}

impl CandidateMatch {
    /// Probability as a percentage with two decimals, e.g. `90.00%`.
    pub fn percent_label(&self) -> String {
        format!("{:.2}%", self.probability * 100.0)
    }
}

/// Identity of one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct BatchId(pub u64);

impl BatchId {
    pub fn next(self) -> Self {
        BatchId(self.0.wrapping_add(1))
    }
}

impl fmt::Display for BatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "batch#{}", self.0)
    }
}

/// Short text note stored by the service (`wel/` endpoint).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredNote {
    pub id: u64,
    pub input_text: String,
}

/// Trims `text` and checks it fits a note.
pub fn validate_note_text(text: &str) -> Result<&str> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::EmptyInput);
    }
    let len = text.chars().count();
    if len > NOTE_MAX_CHARS {
        return Err(Error::InvalidInput(format!(
            "note is {} characters, the limit is {}",
            len, NOTE_MAX_CHARS
        )));
    }
    Ok(text)
}

/// File previously uploaded to the service (`file/` endpoint).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredUpload {
    pub id: u64,
    #[serde(default)]
    pub file: Option<String>,
}

impl StoredUpload {
    /// Display name: last path segment of the stored file URL.
    pub fn display_name(&self) -> &str {
        self.file
            .as_deref()
            .and_then(|f| f.rsplit('/').next())
            .unwrap_or("")
    }
}
