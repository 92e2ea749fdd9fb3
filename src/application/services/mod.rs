mod recording_service;
mod room_service;
mod summary_worker;

pub use recording_service::{RecordingService, RecordingServiceError};
pub use room_service::{InvitationOutcome, RoomService, RoomServiceError};
pub use summary_worker::{
    EMPTY_TRANSCRIPT_SUMMARY, SummaryMessage, SummaryWorker, SummaryWorkerError, summary_title,
};
