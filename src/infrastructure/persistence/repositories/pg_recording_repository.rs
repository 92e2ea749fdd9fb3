use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use super::super::pg_pool::map_sqlx_error;
use crate::application::ports::{RecordingRepository, RepositoryError};
use crate::domain::{Recording, RecordingId, RecordingMode, RecordingStatus, RoomId};

/// Recording persistence backed by PostgreSQL.
///
/// The one-ongoing-recording-per-room guard is the partial unique index
/// `unique_initiated_or_active_recording_per_room`; a violating insert or
/// update fails atomically and comes back as a constraint violation.
pub struct PgRecordingRepository {
    pool: PgPool,
}

impl PgRecordingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RecordingRow {
    id: Uuid,
    room_id: Uuid,
    mode: String,
    status: String,
    worker_id: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<RecordingRow> for Recording {
    type Error = RepositoryError;

    fn try_from(r: RecordingRow) -> Result<Self, Self::Error> {
        Ok(Recording {
            id: RecordingId::from_uuid(r.id),
            room_id: RoomId::from_uuid(r.room_id),
            mode: r
                .mode
                .parse::<RecordingMode>()
                .map_err(RepositoryError::QueryFailed)?,
            status: r
                .status
                .parse::<RecordingStatus>()
                .map_err(RepositoryError::QueryFailed)?,
            worker_id: r.worker_id,
            created_at: r.created_at,
            updated_at: r.updated_at,
        })
    }
}

#[async_trait]
impl RecordingRepository for PgRecordingRepository {
    #[instrument(skip(self, recording), fields(recording_id = %recording.id, room_id = %recording.room_id))]
    async fn create(&self, recording: &Recording) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO recordings (id, room_id, mode, status, worker_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(recording.id.as_uuid())
        .bind(recording.room_id.as_uuid())
        .bind(recording.mode.as_str())
        .bind(recording.status.as_str())
        .bind(&recording.worker_id)
        .bind(recording.created_at)
        .bind(recording.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    #[instrument(skip(self), fields(recording_id = %id))]
    async fn get_by_id(&self, id: RecordingId) -> Result<Option<Recording>, RepositoryError> {
        let row = sqlx::query_as::<_, RecordingRow>(
            r#"
            SELECT id, room_id, mode, status, worker_id, created_at, updated_at
            FROM recordings
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(Recording::try_from).transpose()
    }

    #[instrument(skip(self), fields(recording_id = %id, expected = %expected, status = %status))]
    async fn update_status(
        &self,
        id: RecordingId,
        expected: RecordingStatus,
        status: RecordingStatus,
        worker_id: Option<&str>,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE recordings
            SET status = $1, worker_id = COALESCE($2, worker_id), updated_at = $3
            WHERE id = $4 AND status = $5
            "#,
        )
        .bind(status.as_str())
        .bind(worker_id)
        .bind(Utc::now())
        .bind(id.as_uuid())
        .bind(expected.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            let current: Option<String> =
                sqlx::query_scalar("SELECT status FROM recordings WHERE id = $1")
                    .bind(id.as_uuid())
                    .fetch_optional(&self.pool)
                    .await
                    .map_err(map_sqlx_error)?;

            return Err(match current {
                Some(current) => RepositoryError::Conflict(format!(
                    "recording {} is {}, expected {}",
                    id, current, expected
                )),
                None => RepositoryError::NotFound(format!("recording {}", id)),
            });
        }

        Ok(())
    }

    #[instrument(skip(self), fields(room_id = %room_id))]
    async fn list_by_room(&self, room_id: RoomId) -> Result<Vec<Recording>, RepositoryError> {
        let rows = sqlx::query_as::<_, RecordingRow>(
            r#"
            SELECT id, room_id, mode, status, worker_id, created_at, updated_at
            FROM recordings
            WHERE room_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(room_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(Recording::try_from).collect()
    }

    #[instrument(skip(self), fields(room_id = %room_id))]
    async fn find_ongoing(&self, room_id: RoomId) -> Result<Option<Recording>, RepositoryError> {
        let ongoing: Vec<String> = RecordingStatus::ONGOING
            .iter()
            .map(|s| s.as_str().to_string())
            .collect();

        let row = sqlx::query_as::<_, RecordingRow>(
            r#"
            SELECT id, room_id, mode, status, worker_id, created_at, updated_at
            FROM recordings
            WHERE room_id = $1 AND status = ANY($2)
            "#,
        )
        .bind(room_id.as_uuid())
        .bind(ongoing)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(Recording::try_from).transpose()
    }
}
