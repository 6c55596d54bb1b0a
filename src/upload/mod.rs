mod appwrite;
mod backend;
mod batch;
mod error;
mod types;

pub use appwrite::AppwriteStorage;
pub use backend::StorageBackend;
pub use batch::BatchUploader;
pub use error::{StorageError, UploadError};
pub use types::{BatchReport, BatchStatus, FileState, FileStatus, StoredFile};
