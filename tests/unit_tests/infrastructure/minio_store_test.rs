use std::sync::Arc;

use object_store::memory::InMemory;
use object_store::path::Path;
use object_store::{ObjectStore, PutPayload};

use meet::application::ports::{RecordingStore, RecordingStoreError};
use meet::infrastructure::storage::MinioRecordingStore;

async fn store_with(key: &str, data: &'static [u8]) -> MinioRecordingStore {
    let inner = Arc::new(InMemory::new());
    inner
        .put(&Path::from(key), PutPayload::from(data.to_vec()))
        .await
        .unwrap();
    MinioRecordingStore::from_store(inner)
}

#[tokio::test]
async fn given_existing_object_when_fetching_then_returns_bytes() {
    let store = store_with("recordings/call.ogg", b"OggS-audio").await;

    let data = store.fetch("recordings/call.ogg").await.unwrap();

    assert_eq!(data, b"OggS-audio".to_vec());
}

#[tokio::test]
async fn given_existing_object_when_heading_then_returns_size() {
    let store = store_with("call.ogg", b"12345").await;

    assert_eq!(store.head("call.ogg").await.unwrap(), 5);
}

#[tokio::test]
async fn given_missing_object_when_fetching_then_not_found() {
    let store = store_with("call.ogg", b"12345").await;

    let result = store.fetch("other.ogg").await;

    assert!(matches!(result, Err(RecordingStoreError::NotFound(key)) if key == "other.ogg"));
}

#[test]
fn given_bare_host_when_building_then_succeeds() {
    let store = MinioRecordingStore::new("minio:9000", "meet-media", "meet", "password");

    assert!(store.is_ok());
}
