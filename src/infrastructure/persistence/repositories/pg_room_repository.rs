use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::PgPool;
use sqlx::types::Json;
use tracing::instrument;
use uuid::Uuid;

use super::super::pg_pool::map_sqlx_error;
use crate::application::ports::{RepositoryError, RoomRepository};
use crate::domain::{Room, RoomId};

pub struct PgRoomRepository {
    pool: PgPool,
}

impl PgRoomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RoomRow {
    id: Uuid,
    name: String,
    slug: String,
    is_public: bool,
    configuration: Json<Value>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<RoomRow> for Room {
    fn from(r: RoomRow) -> Self {
        Room {
            id: RoomId::from_uuid(r.id),
            name: r.name,
            slug: r.slug,
            is_public: r.is_public,
            configuration: r.configuration.0,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[async_trait]
impl RoomRepository for PgRoomRepository {
    #[instrument(skip(self, room), fields(room_id = %room.id, slug = %room.slug))]
    async fn create(&self, room: &Room) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO rooms (id, name, slug, is_public, configuration, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(room.id.as_uuid())
        .bind(&room.name)
        .bind(&room.slug)
        .bind(room.is_public)
        .bind(Json(&room.configuration))
        .bind(room.created_at)
        .bind(room.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    #[instrument(skip(self), fields(room_id = %id))]
    async fn get_by_id(&self, id: RoomId) -> Result<Option<Room>, RepositoryError> {
        let row = sqlx::query_as::<_, RoomRow>(
            r#"
            SELECT id, name, slug, is_public, configuration, created_at, updated_at
            FROM rooms
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(Room::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Room>, RepositoryError> {
        let rows = sqlx::query_as::<_, RoomRow>(
            r#"
            SELECT id, name, slug, is_public, configuration, created_at, updated_at
            FROM rooms
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Room::from).collect())
    }

    #[instrument(skip(self, room), fields(room_id = %room.id))]
    async fn update(&self, room: &Room) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE rooms
            SET name = $1, slug = $2, is_public = $3, configuration = $4, updated_at = $5
            WHERE id = $6
            "#,
        )
        .bind(&room.name)
        .bind(&room.slug)
        .bind(room.is_public)
        .bind(Json(&room.configuration))
        .bind(Utc::now())
        .bind(room.id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("room {}", room.id)));
        }

        Ok(())
    }

    #[instrument(skip(self), fields(room_id = %id))]
    async fn delete(&self, id: RoomId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
