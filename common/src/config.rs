//! Service address and result breadth

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TOP_K: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceConfig {
    pub base_url: String,
    /// Number of candidates kept per file. Also sent to the service.
    pub top_k: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>, top_k: usize) -> Result<Self> {
        let config = Self {
            base_url: base_url.into(),
            top_k,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(Error::Config("service base URL is empty".into()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::Config(format!("service base URL must be http(s): {}", url)));
        }
        if self.top_k == 0 {
            return Err(Error::Config("top_k must be at least 1".into()));
        }
        Ok(())
    }

    fn base(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    /// `POST` target for a batch: `{base}/predict/{top_k}/`.
    pub fn predict_url(&self) -> String {
        format!("{}/predict/{}/", self.base(), self.top_k)
    }

    pub fn notes_url(&self) -> String {
        format!("{}/wel/", self.base())
    }

    pub fn note_url(&self, id: u64) -> String {
        format!("{}/wel/{}/", self.base(), id)
    }

    pub fn uploads_url(&self) -> String {
        format!("{}/file/", self.base())
    }

    pub fn upload_url(&self, id: u64) -> String {
        format!("{}/file/{}/", self.base(), id)
    }
}
