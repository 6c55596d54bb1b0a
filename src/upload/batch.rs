use bytes::Bytes;
use std::fs;
use std::sync::mpsc::Sender;

use crate::config::ConnectionConfig;
use crate::selection::SelectedFile;

use super::appwrite::AppwriteStorage;
use super::backend::StorageBackend;
use super::error::UploadError;
use super::types::{BatchReport, FileState, FileStatus};

/// Drives one upload batch: every file in the snapshot, strictly in order,
/// stopping at the first failure. Per-file progress goes out on the status
/// channel as it happens; the terminal outcome is the return value. The
/// uploader holds no state between runs.
pub struct BatchUploader<S: StorageBackend> {
    storage: S,
    bucket_id: String,
}

impl BatchUploader<AppwriteStorage> {
    /// Builds an uploader from the connection form. Rejects incomplete
    /// details before anything is constructed; no network effect either way.
    pub fn from_config(config: &ConnectionConfig) -> Result<Self, UploadError> {
        if !config.is_complete() {
            return Err(UploadError::IncompleteConfig);
        }
        Ok(Self::new(
            AppwriteStorage::new(&config.endpoint, &config.project_id),
            &config.bucket_id,
        ))
    }
}

impl<S: StorageBackend> BatchUploader<S> {
    pub fn new(storage: S, bucket_id: &str) -> Self {
        Self {
            storage,
            bucket_id: bucket_id.to_string(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub async fn run(
        &self,
        files: &[SelectedFile],
        status_sender: &Sender<FileStatus>,
    ) -> Result<BatchReport, UploadError> {
        if files.is_empty() {
            return Err(UploadError::EmptySelection);
        }

        let total = files.len();
        let mut report = BatchReport::default();

        for (index, file) in files.iter().enumerate() {
            tracing::debug!(name = %file.name, index, total, "uploading file");
            status_sender
                .send(FileStatus {
                    name: file.name.clone(),
                    state: FileState::Uploading,
                })
                .unwrap_or_default();

            let content = match fs::read(&file.path) {
                Ok(bytes) => Bytes::from(bytes),
                Err(source) => {
                    let error = UploadError::FileRead {
                        name: file.name.clone(),
                        source,
                    };
                    status_sender
                        .send(FileStatus {
                            name: file.name.clone(),
                            state: FileState::Failed(error.to_string()),
                        })
                        .unwrap_or_default();
                    return Err(error);
                }
            };

            match self.storage.store(&self.bucket_id, &file.name, content).await {
                Ok(stored) => {
                    tracing::debug!(name = %stored.name, id = %stored.id, "file stored");
                    status_sender
                        .send(FileStatus {
                            name: file.name.clone(),
                            state: FileState::Stored,
                        })
                        .unwrap_or_default();
                    report.uploaded.push(stored);
                }
                Err(error) => {
                    tracing::warn!(name = %file.name, %error, "upload failed, stopping batch");
                    status_sender
                        .send(FileStatus {
                            name: file.name.clone(),
                            state: FileState::Failed(error.to_string()),
                        })
                        .unwrap_or_default();
                    // Files stored before this one stay stored; the batch is
                    // not transactional.
                    return Err(error.into());
                }
            }
        }

        tracing::info!(uploaded = report.uploaded.len(), "batch completed");
        Ok(report)
    }
}
