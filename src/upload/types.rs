/// Per-file lifecycle within a batch.
#[derive(Debug, Clone)]
pub enum FileState {
    Uploading,
    Stored,
    Failed(String),
}

/// Progress event streamed from the batch thread to the UI, one per
/// state change of one file.
#[derive(Debug, Clone)]
pub struct FileStatus {
    pub name: String,
    pub state: FileState,
}

/// Terminal outcome of one batch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    Success,
    Error,
}

/// A file the remote confirmed, with the ID it minted for it.
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub id: String,
    pub name: String,
}

/// Returned by the driver when every file in the batch was stored.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub uploaded: Vec<StoredFile>,
}
