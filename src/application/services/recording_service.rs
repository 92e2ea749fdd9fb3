use std::sync::Arc;

use tracing::instrument;

use crate::application::ports::{
    ONGOING_RECORDING_GUARD, RecordingRepository, RepositoryError, RoomRepository,
};
use crate::domain::{Recording, RecordingId, RecordingMode, RecordingStatus, RoomId};

/// Drives the recording lifecycle on top of the repository-level guard that
/// keeps at most one ongoing recording per room.
pub struct RecordingService {
    recording_repository: Arc<dyn RecordingRepository>,
    room_repository: Arc<dyn RoomRepository>,
}

impl RecordingService {
    pub fn new(
        recording_repository: Arc<dyn RecordingRepository>,
        room_repository: Arc<dyn RoomRepository>,
    ) -> Self {
        Self {
            recording_repository,
            room_repository,
        }
    }

    #[instrument(skip(self), fields(room_id = %room_id))]
    pub async fn start_recording(
        &self,
        room_id: RoomId,
        mode: RecordingMode,
    ) -> Result<Recording, RecordingServiceError> {
        if self.room_repository.get_by_id(room_id).await?.is_none() {
            return Err(RecordingServiceError::RoomNotFound(room_id));
        }

        let recording = Recording::new(room_id, mode);
        self.recording_repository
            .create(&recording)
            .await
            .map_err(|e| map_guard_violation(e, room_id))?;

        tracing::info!(
            recording_id = %recording.id,
            mode = %mode,
            "Recording initiated"
        );

        Ok(recording)
    }

    #[instrument(skip(self), fields(recording_id = %id, to = %status))]
    pub async fn transition(
        &self,
        id: RecordingId,
        status: RecordingStatus,
        worker_id: Option<&str>,
    ) -> Result<Recording, RecordingServiceError> {
        let mut recording = self
            .recording_repository
            .get_by_id(id)
            .await?
            .ok_or(RecordingServiceError::NotFound(id))?;

        if !recording.status.can_transition_to(status) {
            tracing::warn!(from = %recording.status, "Rejected recording transition");
            return Err(RecordingServiceError::InvalidTransition {
                from: recording.status,
                to: status,
            });
        }

        self.recording_repository
            .update_status(id, recording.status, status, worker_id)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => {
                    tracing::warn!(expected = %recording.status, "Recording changed concurrently");
                    RecordingServiceError::StatusChanged {
                        id,
                        expected: recording.status,
                    }
                }
                other => map_guard_violation(other, recording.room_id),
            })?;

        tracing::debug!(from = %recording.status, "Recording status transition");

        recording.status = status;
        if let Some(worker_id) = worker_id {
            recording.worker_id = Some(worker_id.to_string());
        }
        recording.updated_at = chrono::Utc::now();
        Ok(recording)
    }

    /// Ends the room's ongoing recording: `active` becomes `stopped`, a
    /// recording that never left `initiated` is marked `failed_to_start`.
    #[instrument(skip(self), fields(room_id = %room_id))]
    pub async fn stop_recording(&self, room_id: RoomId) -> Result<Recording, RecordingServiceError> {
        let recording = self
            .recording_repository
            .find_ongoing(room_id)
            .await?
            .ok_or(RecordingServiceError::NoOngoingRecording(room_id))?;

        let next = match recording.status {
            RecordingStatus::Active => RecordingStatus::Stopped,
            _ => RecordingStatus::FailedToStart,
        };

        self.transition(recording.id, next, None).await
    }

    pub async fn get(&self, id: RecordingId) -> Result<Recording, RecordingServiceError> {
        self.recording_repository
            .get_by_id(id)
            .await?
            .ok_or(RecordingServiceError::NotFound(id))
    }

    pub async fn list_for_room(
        &self,
        room_id: RoomId,
    ) -> Result<Vec<Recording>, RecordingServiceError> {
        if self.room_repository.get_by_id(room_id).await?.is_none() {
            return Err(RecordingServiceError::RoomNotFound(room_id));
        }
        Ok(self.recording_repository.list_by_room(room_id).await?)
    }
}

fn map_guard_violation(error: RepositoryError, room_id: RoomId) -> RecordingServiceError {
    if error.is_violation_of(ONGOING_RECORDING_GUARD) {
        tracing::warn!(room_id = %room_id, "Room already has an ongoing recording");
        return RecordingServiceError::AlreadyRecording(room_id);
    }
    RecordingServiceError::Repository(error)
}

#[derive(Debug, thiserror::Error)]
pub enum RecordingServiceError {
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),
    #[error("recording not found: {0}")]
    NotFound(RecordingId),
    #[error("room {0} has no ongoing recording")]
    NoOngoingRecording(RoomId),
    #[error("room {0} already has an initiated or active recording")]
    AlreadyRecording(RoomId),
    #[error("invalid recording transition from {from} to {to}")]
    InvalidTransition {
        from: RecordingStatus,
        to: RecordingStatus,
    },
    #[error("recording {id} is no longer {expected}")]
    StatusChanged {
        id: RecordingId,
        expected: RecordingStatus,
    },
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}
