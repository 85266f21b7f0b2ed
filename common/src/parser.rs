//! Classifier response parser
//!
//! The predict endpoint answers with one object per submitted file:
//!
//! ```json
//! [
//!   {"file_name": "a.py", "file_lang": "python",
//!    "results": [["bubble_sort", 12, 0.91], ["insertion_sort", 40, 0.05]]}
//! ]
//! ```
//!
//! Each `results` row is `[candidate, <unused>, probability]`, already in
//! descending order. Only this per-file array shape is accepted.

use crate::error::{Error, Result};
use crate::types::{CandidateMatch, StoredNote, StoredUpload};
use serde::Deserialize;
use serde_json::Value;

/// Ranked candidates for one submitted file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileMatches {
    pub file_name: String,
    pub language: Option<String>,
    pub candidates: Vec<CandidateMatch>,
}

#[derive(Deserialize)]
struct RawFileResult {
    file_name: String,
    #[serde(default)]
    file_lang: Option<String>,
    results: Vec<RawCandidate>,
}

#[derive(Deserialize)]
struct RawCandidate(String, #[allow(dead_code)] Value, f64);

/// Parses a predict response body.
///
/// # Returns
/// * `Ok(Vec<FileMatches>)` - one entry per file, in response order
/// * `Err(Error::InvalidResponse)` - not JSON, not a non-empty array,
///   missing fields, or a probability outside [0, 1]
pub fn parse_predict_response(body: &str) -> Result<Vec<FileMatches>> {
    let value: Value = serde_json::from_str(body.trim())?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(_) => {
            return Err(Error::InvalidResponse(
                "expected an array of per-file results, got a single object".into(),
            ))
        }
        other => {
            return Err(Error::InvalidResponse(format!(
                "expected an array of per-file results, got {}",
                json_kind(&other)
            )))
        }
    };

    if items.is_empty() {
        return Err(Error::InvalidResponse("empty results collection".into()));
    }

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let raw: RawFileResult = serde_json::from_value(item)
                .map_err(|e| Error::InvalidResponse(format!("entry {}: {}", index, e)))?;
            convert(raw)
        })
        .collect()
}

fn convert(raw: RawFileResult) -> Result<FileMatches> {
    let language = raw.file_lang.filter(|l| !l.trim().is_empty());

    let candidates = raw
        .results
        .into_iter()
        .map(|RawCandidate(name, _, probability)| {
            if !(0.0..=1.0).contains(&probability) {
                return Err(Error::InvalidResponse(format!(
                    "{}: probability {} for {} is outside [0, 1]",
                    raw.file_name, probability, name
                )));
            }
            Ok(CandidateMatch {
                name,
                probability,
                language: language.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(FileMatches {
        file_name: raw.file_name,
        language,
        candidates,
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parses the `wel/` listing.
pub fn parse_notes(body: &str) -> Result<Vec<StoredNote>> {
    Ok(serde_json::from_str(body.trim())?)
}

/// Parses the `file/` listing.
pub fn parse_uploads(body: &str) -> Result<Vec<StoredUpload>> {
    Ok(serde_json::from_str(body.trim())?)
}
