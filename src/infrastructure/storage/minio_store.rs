use std::sync::Arc;

use object_store::aws::AmazonS3Builder;
use object_store::path::Path as StorePath;
use object_store::{Error as ObjectStoreError, ObjectStore};

use crate::application::ports::{RecordingStore, RecordingStoreError};

/// Recording files in a Minio bucket, reached through the S3 API.
pub struct MinioRecordingStore {
    inner: Arc<dyn ObjectStore>,
}

impl MinioRecordingStore {
    pub fn new(
        url: &str,
        bucket: &str,
        access_key: &str,
        secret_key: &str,
    ) -> Result<Self, RecordingStoreError> {
        let endpoint = if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("http://{}", url)
        };

        let store = AmazonS3Builder::new()
            .with_endpoint(&endpoint)
            .with_allow_http(endpoint.starts_with("http://"))
            .with_bucket_name(bucket)
            .with_access_key_id(access_key)
            .with_secret_access_key(secret_key)
            .with_region("us-east-1")
            .with_virtual_hosted_style_request(false)
            .build()
            .map_err(|e| RecordingStoreError::Configuration(e.to_string()))?;

        Ok(Self {
            inner: Arc::new(store),
        })
    }

    pub fn from_store(inner: Arc<dyn ObjectStore>) -> Self {
        Self { inner }
    }
}

fn map_store_error(key: &str, error: ObjectStoreError) -> RecordingStoreError {
    match error {
        ObjectStoreError::NotFound { .. } => RecordingStoreError::NotFound(key.to_string()),
        other => RecordingStoreError::DownloadFailed(other.to_string()),
    }
}

#[async_trait::async_trait]
impl RecordingStore for MinioRecordingStore {
    async fn fetch(&self, key: &str) -> Result<Vec<u8>, RecordingStoreError> {
        let store_path = StorePath::from(key);
        let result = self
            .inner
            .get(&store_path)
            .await
            .map_err(|e| map_store_error(key, e))?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| RecordingStoreError::DownloadFailed(e.to_string()))?;

        tracing::debug!(key = %key, bytes = bytes.len(), "Object downloaded");

        Ok(bytes.to_vec())
    }

    async fn head(&self, key: &str) -> Result<u64, RecordingStoreError> {
        let store_path = StorePath::from(key);
        let meta = self
            .inner
            .head(&store_path)
            .await
            .map_err(|e| map_store_error(key, e))?;
        Ok(meta.size as u64)
    }
}
