use async_trait::async_trait;

use crate::domain::{ResourceAccess, ResourceAccessId, RoomId, UserId};

use super::RepositoryError;

#[async_trait]
pub trait ResourceAccessRepository: Send + Sync {
    async fn create(&self, access: &ResourceAccess) -> Result<(), RepositoryError>;

    async fn get_by_id(&self, id: ResourceAccessId)
    -> Result<Option<ResourceAccess>, RepositoryError>;

    async fn find(
        &self,
        user_id: UserId,
        room_id: RoomId,
    ) -> Result<Option<ResourceAccess>, RepositoryError>;

    async fn list(&self, room_id: Option<RoomId>) -> Result<Vec<ResourceAccess>, RepositoryError>;

    async fn delete(&self, id: ResourceAccessId) -> Result<bool, RepositoryError>;
}
