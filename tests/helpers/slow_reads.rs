use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use meet::application::ports::{RecordingRepository, RepositoryError};
use meet::domain::{Recording, RecordingId, RecordingStatus, RoomId};

/// Holds every `get_by_id` result for a while before returning it, so
/// concurrent callers act on the same snapshot.
pub struct SlowReadRecordingRepository {
    inner: Arc<dyn RecordingRepository>,
    delay: Duration,
}

impl SlowReadRecordingRepository {
    pub fn new(inner: Arc<dyn RecordingRepository>, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

#[async_trait]
impl RecordingRepository for SlowReadRecordingRepository {
    async fn create(&self, recording: &Recording) -> Result<(), RepositoryError> {
        self.inner.create(recording).await
    }

    async fn get_by_id(&self, id: RecordingId) -> Result<Option<Recording>, RepositoryError> {
        let recording = self.inner.get_by_id(id).await;
        tokio::time::sleep(self.delay).await;
        recording
    }

    async fn update_status(
        &self,
        id: RecordingId,
        expected: RecordingStatus,
        status: RecordingStatus,
        worker_id: Option<&str>,
    ) -> Result<(), RepositoryError> {
        self.inner
            .update_status(id, expected, status, worker_id)
            .await
    }

    async fn list_by_room(&self, room_id: RoomId) -> Result<Vec<Recording>, RepositoryError> {
        self.inner.list_by_room(room_id).await
    }

    async fn find_ongoing(&self, room_id: RoomId) -> Result<Option<Recording>, RepositoryError> {
        self.inner.find_ongoing(room_id).await
    }
}
