mod minio_store;
mod mock_store;

pub use minio_store::MinioRecordingStore;
pub use mock_store::MockRecordingStore;
