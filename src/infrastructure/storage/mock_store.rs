use std::collections::HashMap;

use crate::application::ports::{RecordingStore, RecordingStoreError};

/// Serves recordings from a fixed in-memory map.
#[derive(Default)]
pub struct MockRecordingStore {
    objects: HashMap<String, Vec<u8>>,
}

impl MockRecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object(mut self, key: impl Into<String>, data: Vec<u8>) -> Self {
        self.objects.insert(key.into(), data);
        self
    }
}

#[async_trait::async_trait]
impl RecordingStore for MockRecordingStore {
    async fn fetch(&self, key: &str) -> Result<Vec<u8>, RecordingStoreError> {
        self.objects
            .get(key)
            .cloned()
            .ok_or_else(|| RecordingStoreError::NotFound(key.to_string()))
    }

    async fn head(&self, key: &str) -> Result<u64, RecordingStoreError> {
        self.objects
            .get(key)
            .map(|data| data.len() as u64)
            .ok_or_else(|| RecordingStoreError::NotFound(key.to_string()))
    }
}
