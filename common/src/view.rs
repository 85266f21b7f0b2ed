//! Which panel is on screen
//!
//! Upload -> Loading -> Compare, and Back to Upload. Transitions are pure
//! functions of the current state; `Session` decides when to call them.

use crate::error::{Error, Result};
use crate::types::BatchId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Upload,
    /// A batch is in flight. `from_compare` records where a failure returns to.
    Loading { batch: BatchId, from_compare: bool },
    Compare,
}

impl ViewState {
    /// Enters Loading for `batch`. Refused while another batch is in flight.
    pub fn start(self, batch: BatchId) -> Result<Self> {
        match self {
            ViewState::Loading { .. } => Err(Error::SubmissionInFlight),
            ViewState::Upload => Ok(ViewState::Loading {
                batch,
                from_compare: false,
            }),
            ViewState::Compare => Ok(ViewState::Loading {
                batch,
                from_compare: true,
            }),
        }
    }

    /// Loading(batch) -> Compare. Any other state, or another batch, is kept.
    pub fn complete(self, batch: BatchId) -> Self {
        match self {
            ViewState::Loading { batch: current, .. } if current == batch => ViewState::Compare,
            other => other,
        }
    }

    /// Loading(batch) -> the view active before submission.
    pub fn fail(self, batch: BatchId) -> Self {
        match self {
            ViewState::Loading {
                batch: current,
                from_compare,
            } if current == batch => {
                if from_compare {
                    ViewState::Compare
                } else {
                    ViewState::Upload
                }
            }
            other => other,
        }
    }

    pub fn back(self) -> Self {
        ViewState::Upload
    }

    pub fn in_flight(&self) -> Option<BatchId> {
        match self {
            ViewState::Loading { batch, .. } => Some(*batch),
            _ => None,
        }
    }
}
