//! Batch driver tests
//!
//! Runs whole submissions against a fake classifier with real files on
//! disk, varying which completion arrives first.

use algomatch::{files_from_paths, run_batch, Classifier};
use algomatch_common::{
    BatchProgress, Error, Result, ServiceConfig, Session, UploadedFile, ViewState,
};
use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::{tempdir, TempDir};

const TWO_FILE_BODY: &str = r#"[
  {"file_name": "b.c", "file_lang": "c",
   "results": [["quick_sort", 3, 0.7], ["merge_sort", 9, 0.2]]},
  {"file_name": "a.py", "file_lang": "python",
   "results": [["bubble_sort", 12, 0.91], ["insertion_sort", 40, 0.05], ["shell_sort", 1, 0.01]]}
]"#;

struct FakeClassifier {
    response: Result<String>,
    delay: Duration,
    calls: Cell<usize>,
    seen: Cell<usize>,
}

impl FakeClassifier {
    fn answering(body: &str, delay_ms: u64) -> Self {
        Self {
            response: Ok(body.to_string()),
            delay: Duration::from_millis(delay_ms),
            calls: Cell::new(0),
            seen: Cell::new(0),
        }
    }

    fn failing(error: Error) -> Self {
        Self {
            response: Err(error),
            delay: Duration::ZERO,
            calls: Cell::new(0),
            seen: Cell::new(0),
        }
    }
}

impl Classifier<PathBuf> for FakeClassifier {
    async fn predict(&self, files: &[UploadedFile<PathBuf>]) -> Result<String> {
        self.calls.set(self.calls.get() + 1);
        self.seen.set(files.len());
        tokio::time::sleep(self.delay).await;
        self.response.clone()
    }
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn write_sources(dir: &Path) -> Vec<PathBuf> {
    let a = dir.join("a.py");
    let b = dir.join("b.c");
    std::fs::write(&a, "def sort(xs):\n    return sorted(xs)\n").unwrap();
    std::fs::write(&b, "int main(void) { return 0; }\n").unwrap();
    vec![a, b]
}

fn session_with_sources() -> (TempDir, Session<PathBuf>) {
    let dir = tempdir().expect("Failed to create temp dir");
    let paths = write_sources(dir.path());
    let mut session = Session::new(ServiceConfig::default());
    let outcome = session.add_files(files_from_paths(paths));
    assert_eq!(outcome.accepted, vec!["a.py", "b.c"]);
    (dir, session)
}

/// Response arrives after every read has finished
#[tokio::test]
async fn test_batch_commits_when_response_is_last() {
    init_logger();
    let (_dir, mut session) = session_with_sources();
    let classifier = FakeClassifier::answering(TWO_FILE_BODY, 50);

    let progress = run_batch(&mut session, &classifier).await.unwrap();

    assert_eq!(progress, BatchProgress::Committed);
    assert_eq!(session.view(), ViewState::Compare);
    assert_eq!(classifier.calls.get(), 1);
    assert_eq!(classifier.seen.get(), 2);

    // first file in submission order, first candidate
    let view = session.compare_view().unwrap();
    assert_eq!(view.file_name, "a.py");
    assert_eq!(view.language, Some("python"));
    assert!(view.content.unwrap().contains("def sort"));
    assert_eq!(view.current.unwrap().name, "bubble_sort");
    assert_eq!(view.position.files, 2);
    assert_eq!(view.position.candidates, 3);
}

/// Response arrives before the reads; the view still waits for both
#[tokio::test]
async fn test_batch_commits_when_response_is_first() {
    init_logger();
    let (_dir, mut session) = session_with_sources();
    let classifier = FakeClassifier::answering(TWO_FILE_BODY, 0);

    let progress = run_batch(&mut session, &classifier).await.unwrap();

    assert_eq!(progress, BatchProgress::Committed);
    assert_eq!(session.content().completed(), 2);
    assert_eq!(session.content().text("b.c"), Some("int main(void) { return 0; }\n"));
}

/// Navigation after a committed batch wraps on both axes
#[tokio::test]
async fn test_navigation_after_batch() {
    init_logger();
    let (_dir, mut session) = session_with_sources();
    let classifier = FakeClassifier::answering(TWO_FILE_BODY, 10);
    run_batch(&mut session, &classifier).await.unwrap();

    session.previous_candidate();
    assert_eq!(session.compare_view().unwrap().current.unwrap().name, "shell_sort");

    session.next_file();
    let view = session.compare_view().unwrap();
    assert_eq!(view.file_name, "b.c");
    assert_eq!(view.current.unwrap().name, "quick_sort");

    session.next_file();
    assert_eq!(session.compare_view().unwrap().file_name, "a.py");

    // positions follow submission order even though b.c was answered first
    session.select_file("b.c");
    assert_eq!(session.compare_view().unwrap().position.file, 2);
}

/// Nothing selected: no call is made
#[tokio::test]
async fn test_empty_upload_set_is_rejected() {
    init_logger();
    let mut session: Session<PathBuf> = Session::new(ServiceConfig::default());
    let classifier = FakeClassifier::answering(TWO_FILE_BODY, 0);

    let err = run_batch(&mut session, &classifier).await.unwrap_err();

    assert_eq!(err, Error::EmptyInput);
    assert_eq!(classifier.calls.get(), 0);
    assert_eq!(session.view(), ViewState::Upload);
}

/// Transport failure keeps the uploads for a retry
#[tokio::test]
async fn test_transport_failure_keeps_uploads() {
    init_logger();
    let (_dir, mut session) = session_with_sources();
    let classifier = FakeClassifier::failing(Error::Transport("connection refused".into()));

    let err = run_batch(&mut session, &classifier).await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(session.view(), ViewState::Upload);
    assert!(!session.is_busy());
    assert_eq!(session.uploads().len(), 2);

    // retry succeeds with the same files
    let classifier = FakeClassifier::answering(TWO_FILE_BODY, 0);
    let progress = run_batch(&mut session, &classifier).await.unwrap();
    assert_eq!(progress, BatchProgress::Committed);
}

/// Malformed response aborts the batch
#[tokio::test]
async fn test_invalid_response_aborts() {
    init_logger();
    let (_dir, mut session) = session_with_sources();
    let classifier =
        FakeClassifier::answering(r#"{"file_name": "a.py", "results": [["X", 0, 0.9]]}"#, 0);

    let err = run_batch(&mut session, &classifier).await.unwrap_err();

    assert!(matches!(err, Error::InvalidResponse(_)));
    assert_eq!(session.view(), ViewState::Upload);
    assert!(session.matrix().is_empty());
    assert!(!session.is_busy());
}

/// A failing read still completes the batch; the pane shows the reason
#[tokio::test]
async fn test_failed_read_counts_toward_completion() {
    init_logger();
    let dir = tempdir().expect("Failed to create temp dir");
    let paths = write_sources(dir.path());
    std::fs::write(&paths[1], [0xff, 0xfe, 0x00]).unwrap();

    let mut session = Session::new(ServiceConfig::default());
    session.add_files(files_from_paths(paths));
    let classifier = FakeClassifier::answering(TWO_FILE_BODY, 0);

    let progress = run_batch(&mut session, &classifier).await.unwrap();
    assert_eq!(progress, BatchProgress::Committed);

    session.select_file("b.c");
    let view = session.compare_view().unwrap();
    assert_eq!(view.content, None);
    assert!(view.read_error.is_some());
}

/// A second submission while one is running is refused
#[tokio::test]
async fn test_submission_in_flight() {
    init_logger();
    let (_dir, mut session) = session_with_sources();
    let _plan = session.submit().unwrap();
    let classifier = FakeClassifier::answering(TWO_FILE_BODY, 0);

    let err = run_batch(&mut session, &classifier).await.unwrap_err();

    assert_eq!(err, Error::SubmissionInFlight);
    assert_eq!(classifier.calls.get(), 0);
}

/// Completions of an abandoned batch are dropped
#[tokio::test]
async fn test_stale_completions_after_back() {
    init_logger();
    let (_dir, mut session) = session_with_sources();
    let plan = session.submit().unwrap();
    session.back();

    let text = algomatch::read_text(&plan.files[0].handle).await;
    assert_eq!(
        session.content_read(plan.batch, &plan.files[0].name, text),
        BatchProgress::Stale
    );
    assert_eq!(
        session.results_received(plan.batch, TWO_FILE_BODY),
        Ok(BatchProgress::Stale)
    );
    assert_eq!(session.view(), ViewState::Upload);
    assert!(session.matrix().is_empty());
}

/// Results from a new batch replace the previous ones in one step
#[tokio::test]
async fn test_resubmit_from_upload_replaces_results() {
    init_logger();
    let (dir, mut session) = session_with_sources();
    run_batch(&mut session, &FakeClassifier::answering(TWO_FILE_BODY, 0))
        .await
        .unwrap();

    session.back();
    let c = dir.path().join("c.txt");
    std::fs::write(&c, "just some notes").unwrap();
    session.add_files(files_from_paths([c]));

    let body = r#"[{"file_name": "c.txt", "file_lang": "", "results": [["binary_search", 0, 0.6]]}]"#;
    run_batch(&mut session, &FakeClassifier::answering(body, 0))
        .await
        .unwrap();

    assert_eq!(session.matrix().keys().count(), 1);
    let view = session.compare_view().unwrap();
    assert_eq!(view.file_name, "c.txt");
    assert_eq!(view.language, None);
    assert_eq!(view.current.unwrap().percent_label(), "60.00%");
}
