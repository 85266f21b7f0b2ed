//! HTTP transport for the classification service
//!
//! `predict` sends one multipart request per batch. The notes and uploads
//! endpoints are thin wrappers over the service's bookkeeping routes.

use algomatch_common::{
    parse_notes, parse_uploads, validate_note_text, Error, Result, ServiceConfig, StoredNote,
    StoredUpload, UploadedFile,
};
use reqwest::multipart::{Form, Part};
use std::path::{Path, PathBuf};

/// The remote classifier, as seen by the batch driver.
#[allow(async_fn_in_trait)]
pub trait Classifier<H> {
    /// Submits `files` and returns the raw response body.
    async fn predict(&self, files: &[UploadedFile<H>]) -> Result<String>;
}

fn transport(err: reqwest::Error) -> Error {
    Error::Transport(err.to_string())
}

/// Reads `path` into a multipart file part named `name`.
async fn file_part(path: &Path, name: &str) -> Result<Part> {
    let bytes = tokio::fs::read(path).await.map_err(|e| Error::Read {
        name: name.to_string(),
        reason: e.to_string(),
    })?;
    Ok(Part::bytes(bytes).file_name(name.to_string()))
}

pub struct ServiceClient {
    http: reqwest::Client,
    config: ServiceConfig,
}

impl ServiceClient {
    pub fn new(config: ServiceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            http: reqwest::Client::new(),
            config,
        })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    async fn body(response: reqwest::Response) -> Result<String> {
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Transport(format!("HTTP {}", status)));
        }
        response.text().await.map_err(transport)
    }

    pub async fn list_notes(&self) -> Result<Vec<StoredNote>> {
        let response = self
            .http
            .get(self.config.notes_url())
            .send()
            .await
            .map_err(transport)?;
        parse_notes(&Self::body(response).await?)
    }

    pub async fn post_note(&self, text: &str) -> Result<StoredNote> {
        let text = validate_note_text(text)?;
        let response = self
            .http
            .post(self.config.notes_url())
            .json(&serde_json::json!({ "inputText": text }))
            .send()
            .await
            .map_err(transport)?;
        let body = Self::body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn delete_note(&self, id: u64) -> Result<()> {
        let response = self
            .http
            .delete(self.config.note_url(id))
            .send()
            .await
            .map_err(transport)?;
        Self::body(response).await.map(|_| ())
    }

    pub async fn list_uploads(&self) -> Result<Vec<StoredUpload>> {
        let response = self
            .http
            .get(self.config.uploads_url())
            .send()
            .await
            .map_err(transport)?;
        parse_uploads(&Self::body(response).await?)
    }

    /// Stores one file on the service (`file` part plus a `filename` field).
    pub async fn upload_file(&self, path: &Path) -> Result<StoredUpload> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| Error::InvalidInput(format!("not a file path: {}", path.display())))?;
        let form = Form::new()
            .part("file", file_part(path, &name).await?)
            .text("filename", name);

        let response = self
            .http
            .post(self.config.uploads_url())
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;
        let body = Self::body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn delete_upload(&self, id: u64) -> Result<()> {
        let response = self
            .http
            .delete(self.config.upload_url(id))
            .send()
            .await
            .map_err(transport)?;
        Self::body(response).await.map(|_| ())
    }
}

impl Classifier<PathBuf> for ServiceClient {
    async fn predict(&self, files: &[UploadedFile<PathBuf>]) -> Result<String> {
        let mut form = Form::new();
        for file in files {
            form = form.part("file", file_part(&file.handle, &file.name).await?);
        }

        log::debug!("POST {} ({} files)", self.config.predict_url(), files.len());
        let response = self
            .http
            .post(self.config.predict_url())
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;
        Self::body(response).await
    }
}
