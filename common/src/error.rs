//! Error types for the comparison client.

use thiserror::Error;

/// Shared error type.
///
/// Every variant is recoverable: the UI layer turns it into a [`Notice`]
/// instead of letting it escape to rendering code.
///
/// [`Notice`]: crate::notice::Notice
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("No files selected")]
    EmptyInput,

    #[error("Unsupported file type: {0} (allowed: .txt, .py, .c)")]
    UnsupportedFileType(String),

    #[error("File already added: {0}")]
    DuplicateFile(String),

    #[error("A submission is already in progress")]
    SubmissionInFlight,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Could not read {name}: {reason}")]
    Read { name: String, reason: String },

    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidResponse(err.to_string())
    }
}

/// Result alias.
pub type Result<T> = std::result::Result<T, Error>;
