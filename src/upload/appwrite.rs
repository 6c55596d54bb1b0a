use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart;
use serde::Deserialize;
use std::time::Duration;

use super::backend::StorageBackend;
use super::error::StorageError;
use super::types::StoredFile;

// Appwrite mints a fresh file ID server-side when it receives this token.
const GENERATED_FILE_ID: &str = "unique()";

// A dead remote fails the batch instead of freezing it.
const STORE_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Deserialize)]
struct CreateFileResponse {
    #[serde(rename = "$id")]
    id: String,
    name: String,
}

/// Appwrite storage client. Construction is pure; the first network
/// traffic happens on the first store call.
#[derive(Debug, Clone)]
pub struct AppwriteStorage {
    http: reqwest::Client,
    endpoint: String,
    project_id: String,
}

impl AppwriteStorage {
    pub fn new(endpoint: &str, project_id: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            project_id: project_id.to_string(),
        }
    }

    fn files_url(&self, bucket_id: &str) -> String {
        format!("{}/storage/buckets/{}/files", self.endpoint, bucket_id)
    }
}

#[async_trait]
impl StorageBackend for AppwriteStorage {
    async fn store(
        &self,
        bucket_id: &str,
        name: &str,
        content: Bytes,
    ) -> Result<StoredFile, StorageError> {
        let part = multipart::Part::bytes(content.to_vec()).file_name(name.to_string());
        let form = multipart::Form::new()
            .text("fileId", GENERATED_FILE_ID)
            .part("file", part);

        let response = self
            .http
            .post(self.files_url(bucket_id))
            .header("X-Appwrite-Project", &self.project_id)
            .multipart(form)
            .timeout(STORE_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        match status.as_u16() {
            200 | 201 => {
                let created = response.json::<CreateFileResponse>().await?;
                Ok(StoredFile {
                    id: created.id,
                    name: created.name,
                })
            }
            401 | 403 => Err(StorageError::Rejected {
                status: status.as_u16(),
                message: "Permission denied. Check the project ID and the bucket's create \
                          permissions."
                    .to_string(),
            }),
            404 => Err(StorageError::Rejected {
                status: 404,
                message: "Bucket not found. Check the endpoint and bucket ID.".to_string(),
            }),
            _ => {
                let message = response.text().await.unwrap_or_default();
                Err(StorageError::Rejected {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}
