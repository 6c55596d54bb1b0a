use appwrite_uploader::config::{ConfigField, ConnectionConfig};
use appwrite_uploader::selection::FileSelection;
use appwrite_uploader::upload::{
    BatchUploader, FileState, FileStatus, StorageBackend, StorageError, StoredFile, UploadError,
};
use async_trait::async_trait;
use bytes::Bytes;
use std::fs;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Mutex;
use tempfile::TempDir;

/// Records every store call in arrival order; optionally fails the call at
/// one index to simulate a mid-batch remote error.
#[derive(Default)]
struct RecordingStorage {
    calls: Mutex<Vec<String>>,
    fail_at: Option<usize>,
}

impl RecordingStorage {
    fn failing_at(index: usize) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_at: Some(index),
        }
    }

    fn call_names(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl StorageBackend for RecordingStorage {
    async fn store(
        &self,
        _bucket_id: &str,
        name: &str,
        _content: Bytes,
    ) -> Result<StoredFile, StorageError> {
        let mut calls = self.calls.lock().unwrap();
        let index = calls.len();
        calls.push(name.to_string());

        if self.fail_at == Some(index) {
            return Err(StorageError::Rejected {
                status: 500,
                message: "injected failure".to_string(),
            });
        }
        Ok(StoredFile {
            id: format!("file-{index}"),
            name: name.to_string(),
        })
    }
}

fn selection_on_disk(dir: &TempDir, names: &[&str]) -> FileSelection {
    let mut selection = FileSelection::default();
    for name in names {
        let path = dir.path().join(name);
        fs::write(&path, format!("content of {name}")).unwrap();
        selection.add_path(&path);
    }
    selection
}

fn complete_config() -> ConnectionConfig {
    ConnectionConfig {
        endpoint: "https://x".to_string(),
        project_id: "p1".to_string(),
        bucket_id: "b1".to_string(),
    }
}

/// Fractions observed after each successful store, in arrival order.
fn stored_fractions(receiver: &Receiver<FileStatus>, total: usize) -> Vec<f32> {
    let mut completed = 0;
    let mut fractions = Vec::new();
    while let Ok(status) = receiver.try_recv() {
        if matches!(status.state, FileState::Stored) {
            completed += 1;
            fractions.push(completed as f32 / total as f32);
        }
    }
    fractions
}

#[test]
fn incomplete_config_is_rejected() {
    for missing in [
        ConfigField::Endpoint,
        ConfigField::ProjectId,
        ConfigField::BucketId,
    ] {
        let mut config = complete_config();
        config.set(missing, "");

        let result = BatchUploader::from_config(&config);
        assert!(matches!(result, Err(UploadError::IncompleteConfig)));
    }
}

#[tokio::test]
async fn empty_selection_is_rejected_without_any_store_call() {
    let storage = RecordingStorage::default();
    let uploader = BatchUploader::new(storage, "b1");
    let (sender, receiver) = channel();

    let result = uploader.run(&[], &sender).await;

    assert!(matches!(result, Err(UploadError::EmptySelection)));
    assert!(uploader.storage().call_names().is_empty());
    assert!(receiver.try_recv().is_err());
}

#[tokio::test]
async fn files_are_stored_in_selection_order() {
    let dir = tempfile::tempdir().unwrap();
    let selection = selection_on_disk(&dir, &["c.txt", "a.txt", "b.txt"]);
    let uploader = BatchUploader::new(RecordingStorage::default(), "b1");
    let (sender, _receiver) = channel();

    let report = uploader.run(selection.files(), &sender).await.unwrap();

    assert_eq!(uploader.storage().call_names(), ["c.txt", "a.txt", "b.txt"]);
    let reported: Vec<_> = report.uploaded.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(reported, ["c.txt", "a.txt", "b.txt"]);
}

#[tokio::test]
async fn progress_is_reported_after_each_file() {
    let dir = tempfile::tempdir().unwrap();
    let selection = selection_on_disk(&dir, &["img1.png", "img2.png"]);
    let uploader = BatchUploader::new(RecordingStorage::default(), "b1");
    let (sender, receiver) = channel();

    uploader.run(selection.files(), &sender).await.unwrap();

    assert_eq!(stored_fractions(&receiver, selection.len()), [0.5, 1.0]);
}

#[tokio::test]
async fn first_failure_stops_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let selection = selection_on_disk(&dir, &["f0.txt", "f1.txt", "f2.txt"]);
    let uploader = BatchUploader::new(RecordingStorage::failing_at(1), "b1");
    let (sender, receiver) = channel();

    let result = uploader.run(selection.files(), &sender).await;

    assert!(matches!(
        result,
        Err(UploadError::Storage(StorageError::Rejected { status: 500, .. }))
    ));
    // f1 was attempted and failed; f2 was never tried, f0 stays stored.
    assert_eq!(uploader.storage().call_names(), ["f0.txt", "f1.txt"]);
    assert_eq!(stored_fractions(&receiver, selection.len()), [1.0 / 3.0]);
}

#[tokio::test]
async fn failing_second_of_two_files_freezes_progress_at_half() {
    let dir = tempfile::tempdir().unwrap();
    let selection = selection_on_disk(&dir, &["img1.png", "img2.png"]);
    let uploader = BatchUploader::new(RecordingStorage::failing_at(1), "b1");
    let (sender, receiver) = channel();

    let result = uploader.run(selection.files(), &sender).await;

    assert!(result.is_err());
    assert_eq!(stored_fractions(&receiver, selection.len()), [0.5]);
    // The driver never mutates the selection; the caller clears it only on
    // success.
    assert_eq!(selection.len(), 2);
}

#[tokio::test]
async fn unreadable_file_fails_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let mut selection = selection_on_disk(&dir, &["present.txt"]);
    selection.add_path(&dir.path().join("missing.txt"));
    let uploader = BatchUploader::new(RecordingStorage::default(), "b1");
    let (sender, receiver) = channel();

    let result = uploader.run(selection.files(), &sender).await;

    assert!(matches!(result, Err(UploadError::FileRead { .. })));
    assert_eq!(uploader.storage().call_names(), ["present.txt"]);

    let mut failed_messages = Vec::new();
    while let Ok(status) = receiver.try_recv() {
        if let FileState::Failed(message) = status.state {
            failed_messages.push((status.name, message));
        }
    }
    assert_eq!(failed_messages.len(), 1);
    assert_eq!(failed_messages[0].0, "missing.txt");
}
