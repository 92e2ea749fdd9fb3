use chrono::{DateTime, Utc};

use super::{RecordingId, RecordingMode, RecordingStatus, RoomId};

#[derive(Debug, Clone, PartialEq)]
pub struct Recording {
    pub id: RecordingId,
    pub room_id: RoomId,
    pub mode: RecordingMode,
    pub status: RecordingStatus,
    pub worker_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recording {
    pub fn new(room_id: RoomId, mode: RecordingMode) -> Self {
        let now = Utc::now();
        Self {
            id: RecordingId::new(),
            room_id,
            mode,
            status: RecordingStatus::Initiated,
            worker_id: None,
            created_at: now,
            updated_at: now,
        }
    }
}
