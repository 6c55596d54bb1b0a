use async_trait::async_trait;
use bytes::Bytes;

use super::error::StorageError;
use super::types::StoredFile;

/// The one capability the batch driver needs from a storage backend: store
/// named binary content under a bucket. Tests substitute a recording mock.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    async fn store(
        &self,
        bucket_id: &str,
        name: &str,
        content: Bytes,
    ) -> Result<StoredFile, StorageError>;
}
