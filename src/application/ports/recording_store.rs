use async_trait::async_trait;

/// Read access to recording files kept in object storage.
#[async_trait]
pub trait RecordingStore: Send + Sync {
    async fn fetch(&self, key: &str) -> Result<Vec<u8>, RecordingStoreError>;

    async fn head(&self, key: &str) -> Result<u64, RecordingStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RecordingStoreError {
    #[error("invalid store configuration: {0}")]
    Configuration(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
}
