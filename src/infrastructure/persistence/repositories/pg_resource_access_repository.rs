use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use super::super::pg_pool::map_sqlx_error;
use crate::application::ports::{RepositoryError, ResourceAccessRepository};
use crate::domain::{ResourceAccess, ResourceAccessId, RoleLevel, RoomId, UserId};

pub struct PgResourceAccessRepository {
    pool: PgPool,
}

impl PgResourceAccessRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ResourceAccessRow {
    id: Uuid,
    user_id: Uuid,
    room_id: Uuid,
    role: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ResourceAccessRow> for ResourceAccess {
    type Error = RepositoryError;

    fn try_from(r: ResourceAccessRow) -> Result<Self, Self::Error> {
        Ok(ResourceAccess {
            id: ResourceAccessId::from_uuid(r.id),
            user_id: UserId::from_uuid(r.user_id),
            room_id: RoomId::from_uuid(r.room_id),
            role: r
                .role
                .parse::<RoleLevel>()
                .map_err(RepositoryError::QueryFailed)?,
            created_at: r.created_at,
            updated_at: r.updated_at,
        })
    }
}

#[async_trait]
impl ResourceAccessRepository for PgResourceAccessRepository {
    #[instrument(skip(self, access), fields(access_id = %access.id))]
    async fn create(&self, access: &ResourceAccess) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO resource_accesses (id, user_id, room_id, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(access.id.as_uuid())
        .bind(access.user_id.as_uuid())
        .bind(access.room_id.as_uuid())
        .bind(access.role.as_str())
        .bind(access.created_at)
        .bind(access.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    #[instrument(skip(self), fields(access_id = %id))]
    async fn get_by_id(
        &self,
        id: ResourceAccessId,
    ) -> Result<Option<ResourceAccess>, RepositoryError> {
        let row = sqlx::query_as::<_, ResourceAccessRow>(
            r#"
            SELECT id, user_id, room_id, role, created_at, updated_at
            FROM resource_accesses
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(ResourceAccess::try_from).transpose()
    }

    #[instrument(skip(self), fields(user_id = %user_id, room_id = %room_id))]
    async fn find(
        &self,
        user_id: UserId,
        room_id: RoomId,
    ) -> Result<Option<ResourceAccess>, RepositoryError> {
        let row = sqlx::query_as::<_, ResourceAccessRow>(
            r#"
            SELECT id, user_id, room_id, role, created_at, updated_at
            FROM resource_accesses
            WHERE user_id = $1 AND room_id = $2
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(room_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(ResourceAccess::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self, room_id: Option<RoomId>) -> Result<Vec<ResourceAccess>, RepositoryError> {
        let rows = sqlx::query_as::<_, ResourceAccessRow>(
            r#"
            SELECT id, user_id, room_id, role, created_at, updated_at
            FROM resource_accesses
            WHERE $1::uuid IS NULL OR room_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(room_id.map(|id| id.as_uuid()))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(ResourceAccess::try_from).collect()
    }

    #[instrument(skip(self), fields(access_id = %id))]
    async fn delete(&self, id: ResourceAccessId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM resource_accesses WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
