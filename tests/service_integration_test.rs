//! Live classifier tests
//!
//! Runs against the service named by `ALGOMATCH_ENDPOINT`; skipped when
//! the variable is unset.

use algomatch::{files_from_paths, run_batch, ServiceClient};
use algomatch_common::{BatchProgress, ServiceConfig, Session};
use tempfile::tempdir;

fn live_config() -> Option<ServiceConfig> {
    match std::env::var("ALGOMATCH_ENDPOINT") {
        Ok(endpoint) if !endpoint.trim().is_empty() => {
            Some(ServiceConfig::new(endpoint.trim(), 5).expect("invalid ALGOMATCH_ENDPOINT"))
        }
        _ => {
            eprintln!("ALGOMATCH_ENDPOINT not set; skipping integration test");
            None
        }
    }
}

#[tokio::test]
async fn service_predict_integration() {
    let Some(config) = live_config() else {
        return;
    };

    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("bubble.py");
    std::fs::write(
        &path,
        "def bubble(xs):\n    for i in range(len(xs)):\n        for j in range(len(xs) - i - 1):\n            if xs[j] > xs[j + 1]:\n                xs[j], xs[j + 1] = xs[j + 1], xs[j]\n    return xs\n",
    )
    .unwrap();

    let client = ServiceClient::new(config.clone()).unwrap();
    let mut session = Session::new(config);
    session.add_files(files_from_paths([path]));

    let progress = run_batch(&mut session, &client).await.expect("batch failed");
    assert_eq!(progress, BatchProgress::Committed);

    let view = session.compare_view().expect("compare view");
    assert_eq!(view.file_name, "bubble.py");
    assert!(view.candidates.len() <= 5);
    assert!(view.candidates.iter().all(|c| (0.0..=1.0).contains(&c.probability)));
}

#[tokio::test]
async fn service_notes_integration() {
    let Some(config) = live_config() else {
        return;
    };

    let client = ServiceClient::new(config).unwrap();
    let note = client.post_note("integration test").await.expect("post failed");
    assert_eq!(note.input_text, "integration test");

    let notes = client.list_notes().await.expect("list failed");
    assert!(notes.iter().any(|n| n.id == note.id));

    client.delete_note(note.id).await.expect("delete failed");
}

#[tokio::test]
async fn service_uploads_integration() {
    let Some(config) = live_config() else {
        return;
    };

    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("stored.txt");
    std::fs::write(&path, "integration upload").unwrap();

    let client = ServiceClient::new(config).unwrap();
    let stored = client.upload_file(&path).await.expect("upload failed");
    assert!(stored.display_name().starts_with("stored"));

    let uploads = client.list_uploads().await.expect("list failed");
    assert!(uploads.iter().any(|u| u.id == stored.id));

    client.delete_upload(stored.id).await.expect("delete failed");
}
