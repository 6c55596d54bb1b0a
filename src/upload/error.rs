use std::io;
use thiserror::Error;

/// Failure of a single remote store call. The reason is carried for the
/// details list and the log; every variant ends the batch the same way.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upload rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Everything that can end a batch attempt.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("endpoint, project ID and bucket ID are all required")]
    IncompleteConfig,

    #[error("no files selected")]
    EmptySelection,

    #[error("failed to read {name}: {source}")]
    FileRead { name: String, source: io::Error },

    #[error(transparent)]
    Storage(#[from] StorageError),
}
