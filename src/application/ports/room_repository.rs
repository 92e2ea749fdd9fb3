use async_trait::async_trait;

use crate::domain::{Room, RoomId};

use super::RepositoryError;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn create(&self, room: &Room) -> Result<(), RepositoryError>;

    async fn get_by_id(&self, id: RoomId) -> Result<Option<Room>, RepositoryError>;

    async fn list(&self) -> Result<Vec<Room>, RepositoryError>;

    async fn update(&self, room: &Room) -> Result<(), RepositoryError>;

    /// Returns `false` when no room matched.
    async fn delete(&self, id: RoomId) -> Result<bool, RepositoryError>;
}
