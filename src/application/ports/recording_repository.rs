use async_trait::async_trait;

use crate::domain::{Recording, RecordingId, RecordingStatus, RoomId};

use super::RepositoryError;

/// Name of the partial unique index that keeps one ongoing recording per room.
pub const ONGOING_RECORDING_GUARD: &str = "unique_initiated_or_active_recording_per_room";

/// Persistence for recordings.
///
/// Implementations must reject, with
/// `RepositoryError::ConstraintViolation(ONGOING_RECORDING_GUARD)`,
/// any `create` or `update_status` that would leave two recordings of the same
/// room in an ongoing status (`initiated` or `active`). The check and the
/// write must be atomic.
///
/// `update_status` only applies when the stored status still equals
/// `expected`; otherwise it fails with [`RepositoryError::Conflict`] and
/// leaves the row untouched.
#[async_trait]
pub trait RecordingRepository: Send + Sync {
    async fn create(&self, recording: &Recording) -> Result<(), RepositoryError>;

    async fn get_by_id(&self, id: RecordingId) -> Result<Option<Recording>, RepositoryError>;

    async fn update_status(
        &self,
        id: RecordingId,
        expected: RecordingStatus,
        status: RecordingStatus,
        worker_id: Option<&str>,
    ) -> Result<(), RepositoryError>;

    async fn list_by_room(&self, room_id: RoomId) -> Result<Vec<Recording>, RepositoryError>;

    async fn find_ongoing(&self, room_id: RoomId) -> Result<Option<Recording>, RepositoryError>;
}
