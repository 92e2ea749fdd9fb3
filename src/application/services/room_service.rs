use std::sync::Arc;

use serde_json::Value;
use tracing::instrument;

use crate::application::ports::{
    RepositoryError, ResourceAccessRepository, RoomRepository, UserRepository,
};
use crate::domain::{ResourceAccess, RoleLevel, Room, RoomId, UserId};

pub struct RoomService {
    room_repository: Arc<dyn RoomRepository>,
    user_repository: Arc<dyn UserRepository>,
    access_repository: Arc<dyn ResourceAccessRepository>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvitationOutcome {
    pub invited: Vec<String>,
    pub already_members: Vec<String>,
    pub unknown: Vec<String>,
}

impl RoomService {
    pub fn new(
        room_repository: Arc<dyn RoomRepository>,
        user_repository: Arc<dyn UserRepository>,
        access_repository: Arc<dyn ResourceAccessRepository>,
    ) -> Self {
        Self {
            room_repository,
            user_repository,
            access_repository,
        }
    }

    #[instrument(skip(self, configuration))]
    pub async fn create_room(
        &self,
        name: String,
        is_public: bool,
        configuration: Option<Value>,
        owner_id: Option<UserId>,
    ) -> Result<Room, RoomServiceError> {
        let room = Room::new(name.clone(), is_public, configuration)
            .ok_or_else(|| RoomServiceError::InvalidName(name))?;

        if let Some(owner_id) = owner_id {
            if self.user_repository.get_by_id(owner_id).await?.is_none() {
                return Err(RoomServiceError::UserNotFound(owner_id));
            }
        }

        self.room_repository
            .create(&room)
            .await
            .map_err(|e| match e {
                RepositoryError::ConstraintViolation(_) => {
                    RoomServiceError::SlugTaken(room.slug.clone())
                }
                other => RoomServiceError::Repository(other),
            })?;

        if let Some(owner_id) = owner_id {
            let access = ResourceAccess::new(owner_id, room.id, RoleLevel::Owner);
            self.access_repository.create(&access).await?;
        }

        tracing::info!(room_id = %room.id, slug = %room.slug, "Room created");
        Ok(room)
    }

    /// Grants `member` access to every known email. Existing accesses are
    /// left untouched.
    #[instrument(skip(self, emails), fields(room_id = %room_id, count = emails.len()))]
    pub async fn invite(
        &self,
        room_id: RoomId,
        emails: &[String],
    ) -> Result<InvitationOutcome, RoomServiceError> {
        if self.room_repository.get_by_id(room_id).await?.is_none() {
            return Err(RoomServiceError::RoomNotFound(room_id));
        }

        let mut outcome = InvitationOutcome {
            invited: Vec::new(),
            already_members: Vec::new(),
            unknown: Vec::new(),
        };

        for email in emails {
            let email = email.trim().to_lowercase();
            if email.is_empty() {
                continue;
            }

            let Some(user) = self.user_repository.get_by_email(&email).await? else {
                outcome.unknown.push(email);
                continue;
            };

            if self.access_repository.find(user.id, room_id).await?.is_some() {
                outcome.already_members.push(email);
                continue;
            }

            let access = ResourceAccess::new(user.id, room_id, RoleLevel::Member);
            match self.access_repository.create(&access).await {
                Ok(()) => outcome.invited.push(email),
                Err(RepositoryError::ConstraintViolation(_)) => outcome.already_members.push(email),
                Err(e) => return Err(e.into()),
            }
        }

        tracing::info!(
            invited = outcome.invited.len(),
            unknown = outcome.unknown.len(),
            "Room invitations processed"
        );

        Ok(outcome)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RoomServiceError {
    #[error("room name yields an empty slug: {0:?}")]
    InvalidName(String),
    #[error("slug already in use: {0}")]
    SlugTaken(String),
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),
    #[error("user not found: {0}")]
    UserNotFound(UserId),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}
