//! algomatch common library
//!
//! Platform-independent core of the comparison client, shared by the
//! browser app (WASM) and the native driver: upload set, content cache,
//! result matrix, navigation cursor, view state and the session that
//! ties them together.

pub mod types;
pub mod error;
pub mod config;
pub mod notice;
pub mod parser;
pub mod upload;
pub mod content;
pub mod matrix;
pub mod cursor;
pub mod view;
pub mod scroll;
pub mod session;

pub use types::{BatchId, CandidateMatch, FileKind, StoredNote, StoredUpload, UploadedFile};
pub use types::{validate_note_text, NOTE_MAX_CHARS};
pub use error::{Error, Result};
pub use config::ServiceConfig;
pub use notice::{Notice, NoticeLevel};
pub use parser::{parse_notes, parse_predict_response, parse_uploads, FileMatches};
pub use upload::{AddOutcome, UploadSet};
pub use content::{ContentEntry, LocalContentCache, ReadProgress};
pub use matrix::ResultMatrix;
pub use cursor::{CursorPosition, NavigationCursor};
pub use view::ViewState;
pub use scroll::{Pane, ScrollMetrics, ScrollSync};
pub use session::{BatchProgress, CompareView, Session, SubmitPlan};
