//! Local file reads via `Blob.text()`

use algomatch_common::{Error, Result, UploadedFile};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileList};

/// Reads a picked file as text. Each call is independent; many may run at once.
pub async fn read_text(file: &File) -> Result<String> {
    let failed = |reason: String| Error::Read {
        name: file.name(),
        reason,
    };
    let value = JsFuture::from(file.text())
        .await
        .map_err(|e| failed(format!("{:?}", e)))?;
    value
        .as_string()
        .ok_or_else(|| failed("content is not text".to_string()))
}

/// Wraps a picker or drop `FileList` as upload candidates.
pub fn collect_files(files: &FileList) -> Vec<UploadedFile<File>> {
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| UploadedFile::new(file.name(), file.type_(), file))
        .collect()
}
