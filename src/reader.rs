//! Local file reads
//!
//! Native counterpart of the browser's "read file to text" primitive.
//! Safe to run many at once; each read touches only its own file.

use algomatch_common::{Error, Result, UploadedFile};
use std::path::{Path, PathBuf};

/// Reads `path` as UTF-8 text.
pub async fn read_text(path: &Path) -> Result<String> {
    let name = display_name(path);
    let bytes = tokio::fs::read(path).await.map_err(|e| Error::Read {
        name: name.clone(),
        reason: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| Error::Read {
        name,
        reason: e.to_string(),
    })
}

/// Wraps local paths as upload candidates. The type filter relies on the
/// file name suffix, as there is no declared MIME type on disk.
pub fn files_from_paths<I, P>(paths: I) -> Vec<UploadedFile<PathBuf>>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    paths
        .into_iter()
        .map(|p| {
            let path = p.into();
            UploadedFile::new(display_name(&path), "", path)
        })
        .collect()
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
