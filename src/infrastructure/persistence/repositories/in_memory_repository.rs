use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::application::ports::{
    ONGOING_RECORDING_GUARD, RecordingRepository, RepositoryError, ResourceAccessRepository, RoomRepository,
    SummaryTaskRepository, UserRepository,
};
use crate::domain::{
    Recording, RecordingId, RecordingStatus, ResourceAccess, ResourceAccessId, Room, RoomId,
    SummaryTask, SummaryTaskId, SummaryTaskStatus, User, UserId,
};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> Result<(), RepositoryError> {
        let mut users = self.users.write().await;
        if users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(RepositoryError::ConstraintViolation(
                "users_email_key".to_string(),
            ));
        }
        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by_key(|u| u.created_at);
        Ok(users)
    }

    async fn update(&self, user: &User) -> Result<(), RepositoryError> {
        let mut users = self.users.write().await;
        let existing = users
            .get_mut(&user.id)
            .ok_or_else(|| RepositoryError::NotFound(format!("user {}", user.id)))?;
        existing.full_name = user.full_name.clone();
        existing.language = user.language;
        existing.updated_at = Utc::now();
        Ok(())
    }
}

/// Room deletion removes the room's accesses and recordings from the linked
/// repositories, mirroring the `ON DELETE CASCADE` foreign keys.
#[derive(Default)]
pub struct InMemoryRoomRepository {
    rooms: RwLock<HashMap<RoomId, Room>>,
    accesses: Option<Arc<InMemoryResourceAccessRepository>>,
    recordings: Option<Arc<InMemoryRecordingRepository>>,
}

impl InMemoryRoomRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cascade(
        accesses: Arc<InMemoryResourceAccessRepository>,
        recordings: Arc<InMemoryRecordingRepository>,
    ) -> Self {
        Self {
            rooms: RwLock::default(),
            accesses: Some(accesses),
            recordings: Some(recordings),
        }
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn create(&self, room: &Room) -> Result<(), RepositoryError> {
        let mut rooms = self.rooms.write().await;
        if rooms.values().any(|r| r.slug == room.slug) {
            return Err(RepositoryError::ConstraintViolation(
                "rooms_slug_key".to_string(),
            ));
        }
        rooms.insert(room.id, room.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: RoomId) -> Result<Option<Room>, RepositoryError> {
        Ok(self.rooms.read().await.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Room>, RepositoryError> {
        let mut rooms: Vec<Room> = self.rooms.read().await.values().cloned().collect();
        rooms.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rooms)
    }

    async fn update(&self, room: &Room) -> Result<(), RepositoryError> {
        let mut rooms = self.rooms.write().await;
        if rooms
            .values()
            .any(|r| r.id != room.id && r.slug == room.slug)
        {
            return Err(RepositoryError::ConstraintViolation(
                "rooms_slug_key".to_string(),
            ));
        }
        let existing = rooms
            .get_mut(&room.id)
            .ok_or_else(|| RepositoryError::NotFound(format!("room {}", room.id)))?;
        *existing = Room {
            updated_at: Utc::now(),
            ..room.clone()
        };
        Ok(())
    }

    async fn delete(&self, id: RoomId) -> Result<bool, RepositoryError> {
        let mut rooms = self.rooms.write().await;
        if rooms.remove(&id).is_none() {
            return Ok(false);
        }
        if let Some(accesses) = &self.accesses {
            accesses.accesses.write().await.retain(|_, a| a.room_id != id);
        }
        if let Some(recordings) = &self.recordings {
            recordings.recordings.write().await.retain(|_, r| r.room_id != id);
        }
        Ok(true)
    }
}

#[derive(Default)]
pub struct InMemoryResourceAccessRepository {
    accesses: RwLock<HashMap<ResourceAccessId, ResourceAccess>>,
}

impl InMemoryResourceAccessRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResourceAccessRepository for InMemoryResourceAccessRepository {
    async fn create(&self, access: &ResourceAccess) -> Result<(), RepositoryError> {
        let mut accesses = self.accesses.write().await;
        if accesses
            .values()
            .any(|a| a.user_id == access.user_id && a.room_id == access.room_id)
        {
            return Err(RepositoryError::ConstraintViolation(
                "resource_access_unique_user_room".to_string(),
            ));
        }
        accesses.insert(access.id, access.clone());
        Ok(())
    }

    async fn get_by_id(
        &self,
        id: ResourceAccessId,
    ) -> Result<Option<ResourceAccess>, RepositoryError> {
        Ok(self.accesses.read().await.get(&id).cloned())
    }

    async fn find(
        &self,
        user_id: UserId,
        room_id: RoomId,
    ) -> Result<Option<ResourceAccess>, RepositoryError> {
        Ok(self
            .accesses
            .read()
            .await
            .values()
            .find(|a| a.user_id == user_id && a.room_id == room_id)
            .cloned())
    }

    async fn list(&self, room_id: Option<RoomId>) -> Result<Vec<ResourceAccess>, RepositoryError> {
        let mut accesses: Vec<ResourceAccess> = self
            .accesses
            .read()
            .await
            .values()
            .filter(|a| room_id.is_none_or(|id| a.room_id == id))
            .cloned()
            .collect();
        accesses.sort_by_key(|a| a.created_at);
        Ok(accesses)
    }

    async fn delete(&self, id: ResourceAccessId) -> Result<bool, RepositoryError> {
        Ok(self.accesses.write().await.remove(&id).is_some())
    }
}

/// Holds the one-ongoing-recording-per-room guard under a single write lock,
/// so the check and the write cannot interleave with another caller.
#[derive(Default)]
pub struct InMemoryRecordingRepository {
    recordings: RwLock<HashMap<RecordingId, Recording>>,
}

impl InMemoryRecordingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn has_other_ongoing(
    recordings: &HashMap<RecordingId, Recording>,
    room_id: RoomId,
    except: RecordingId,
) -> bool {
    recordings
        .values()
        .any(|r| r.id != except && r.room_id == room_id && r.status.is_ongoing())
}

#[async_trait]
impl RecordingRepository for InMemoryRecordingRepository {
    async fn create(&self, recording: &Recording) -> Result<(), RepositoryError> {
        let mut recordings = self.recordings.write().await;
        if recording.status.is_ongoing()
            && has_other_ongoing(&recordings, recording.room_id, recording.id)
        {
            return Err(RepositoryError::ConstraintViolation(ONGOING_RECORDING_GUARD.to_string()));
        }
        recordings.insert(recording.id, recording.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: RecordingId) -> Result<Option<Recording>, RepositoryError> {
        Ok(self.recordings.read().await.get(&id).cloned())
    }

    async fn update_status(
        &self,
        id: RecordingId,
        expected: RecordingStatus,
        status: RecordingStatus,
        worker_id: Option<&str>,
    ) -> Result<(), RepositoryError> {
        let mut recordings = self.recordings.write().await;
        let (room_id, current) = recordings
            .get(&id)
            .map(|r| (r.room_id, r.status))
            .ok_or_else(|| RepositoryError::NotFound(format!("recording {}", id)))?;

        if current != expected {
            return Err(RepositoryError::Conflict(format!(
                "recording {} is {}, expected {}",
                id, current, expected
            )));
        }

        if status.is_ongoing() && has_other_ongoing(&recordings, room_id, id) {
            return Err(RepositoryError::ConstraintViolation(ONGOING_RECORDING_GUARD.to_string()));
        }

        if let Some(recording) = recordings.get_mut(&id) {
            recording.status = status;
            if let Some(worker_id) = worker_id {
                recording.worker_id = Some(worker_id.to_string());
            }
            recording.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn list_by_room(&self, room_id: RoomId) -> Result<Vec<Recording>, RepositoryError> {
        let mut recordings: Vec<Recording> = self
            .recordings
            .read()
            .await
            .values()
            .filter(|r| r.room_id == room_id)
            .cloned()
            .collect();
        recordings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(recordings)
    }

    async fn find_ongoing(&self, room_id: RoomId) -> Result<Option<Recording>, RepositoryError> {
        Ok(self
            .recordings
            .read()
            .await
            .values()
            .find(|r| r.room_id == room_id && r.status.is_ongoing())
            .cloned())
    }
}

#[derive(Default)]
pub struct InMemorySummaryTaskRepository {
    tasks: RwLock<HashMap<SummaryTaskId, SummaryTask>>,
}

impl InMemorySummaryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SummaryTaskRepository for InMemorySummaryTaskRepository {
    async fn create(&self, task: &SummaryTask) -> Result<(), RepositoryError> {
        self.tasks.write().await.insert(task.id, task.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: SummaryTaskId) -> Result<Option<SummaryTask>, RepositoryError> {
        Ok(self.tasks.read().await.get(&id).cloned())
    }

    async fn update_status(
        &self,
        id: SummaryTaskId,
        status: SummaryTaskStatus,
        error_message: Option<&str>,
    ) -> Result<(), RepositoryError> {
        let mut tasks = self.tasks.write().await;
        let task = tasks
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::NotFound(format!("summary task {}", id)))?;
        task.status = status;
        task.error_message = error_message.map(str::to_string);
        task.updated_at = Utc::now();
        Ok(())
    }
}
