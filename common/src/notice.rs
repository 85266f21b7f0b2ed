//! User-visible notifications

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        }
    }
}

/// A message for the notice bar. Every [`Error`] ends up as one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    /// One notice for every file refused by a single add.
    pub fn from_rejections(rejected: &[Error]) -> Option<Self> {
        let first = rejected.first()?;
        let message = rejected
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        Some(Self {
            level: Notice::from(first).level,
            message,
        })
    }
}

impl From<&Error> for Notice {
    fn from(error: &Error) -> Self {
        let level = match error {
            Error::SubmissionInFlight => NoticeLevel::Info,
            Error::EmptyInput
            | Error::UnsupportedFileType(_)
            | Error::DuplicateFile(_)
            | Error::InvalidInput(_) => NoticeLevel::Warning,
            Error::Transport(_)
            | Error::InvalidResponse(_)
            | Error::Read { .. }
            | Error::Config(_) => NoticeLevel::Error,
        };
        Self {
            level,
            message: error.to_string(),
        }
    }
}

impl From<Error> for Notice {
    fn from(error: Error) -> Self {
        Notice::from(&error)
    }
}
