use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;

use meet::application::ports::{RecordingRepository, RepositoryError, RoomRepository};
use meet::application::services::{RecordingService, RecordingServiceError};
use meet::domain::{Recording, RecordingId, RecordingMode, RecordingStatus, Room};
use meet::infrastructure::persistence::{PgRecordingRepository, PgRoomRepository};

use crate::helpers::{SlowReadRecordingRepository, TestPostgres};

async fn create_room(test_pg: &TestPostgres, name: &str) -> Room {
    let room = Room::new(name.to_string(), false, None).unwrap();
    test_pg
        .room_repository
        .create(&room)
        .await
        .expect("Failed to create room");
    room
}

#[tokio::test]
async fn given_new_recording_when_creating_and_retrieving_then_recording_is_persisted() {
    let test_pg = TestPostgres::new().await;
    let room = create_room(&test_pg, "Persisted").await;

    let recording = Recording::new(room.id, RecordingMode::Transcript);
    test_pg
        .recording_repository
        .create(&recording)
        .await
        .expect("Failed to create recording");

    let retrieved = test_pg
        .recording_repository
        .get_by_id(recording.id)
        .await
        .expect("Failed to retrieve recording")
        .expect("Recording not found");

    assert_eq!(retrieved.room_id, room.id);
    assert_eq!(retrieved.mode, RecordingMode::Transcript);
    assert_eq!(retrieved.status, RecordingStatus::Initiated);
}

#[tokio::test]
async fn given_initiated_recording_when_inserting_another_then_constraint_violation() {
    let test_pg = TestPostgres::new().await;
    let room = create_room(&test_pg, "Guarded").await;

    test_pg
        .recording_repository
        .create(&Recording::new(room.id, RecordingMode::ScreenRecording))
        .await
        .expect("Failed to create recording");

    let result = test_pg
        .recording_repository
        .create(&Recording::new(room.id, RecordingMode::ScreenRecording))
        .await;

    assert!(matches!(
        result,
        Err(RepositoryError::ConstraintViolation(_))
    ));
}

#[tokio::test]
async fn given_concurrent_inserts_when_creating_then_exactly_one_succeeds() {
    let test_pg = TestPostgres::new().await;
    let room = create_room(&test_pg, "Contended").await;
    let repository = Arc::new(PgRecordingRepository::new(test_pg.pool.clone()));

    let attempts = (0..8).map(|_| {
        let repository = Arc::clone(&repository);
        let room_id = room.id;
        tokio::spawn(async move {
            repository
                .create(&Recording::new(room_id, RecordingMode::ScreenRecording))
                .await
        })
    });
    let results: Vec<_> = join_all(attempts)
        .await
        .into_iter()
        .map(|joined| joined.expect("Insert task panicked"))
        .collect();

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(
        results
            .iter()
            .filter(|r| r.is_err())
            .all(|r| matches!(r, Err(RepositoryError::ConstraintViolation(_))))
    );
}

#[tokio::test]
async fn given_terminal_recording_when_inserting_new_one_then_succeeds() {
    let test_pg = TestPostgres::new().await;
    let room = create_room(&test_pg, "Reused").await;

    let first = Recording::new(room.id, RecordingMode::ScreenRecording);
    test_pg.recording_repository.create(&first).await.unwrap();
    test_pg
        .recording_repository
        .update_status(
            first.id,
            RecordingStatus::Initiated,
            RecordingStatus::Active,
            Some("worker-7"),
        )
        .await
        .unwrap();
    test_pg
        .recording_repository
        .update_status(first.id, RecordingStatus::Active, RecordingStatus::Stopped, None)
        .await
        .unwrap();

    let second = Recording::new(room.id, RecordingMode::ScreenRecording);
    test_pg
        .recording_repository
        .create(&second)
        .await
        .expect("New recording after a terminal one must be accepted");

    let stopped = test_pg
        .recording_repository
        .get_by_id(first.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stopped.status, RecordingStatus::Stopped);
    assert_eq!(stopped.worker_id.as_deref(), Some("worker-7"));

    let ongoing = test_pg
        .recording_repository
        .find_ongoing(room.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(ongoing.id, second.id);

    let listed = test_pg.recording_repository.list_by_room(room.id).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id);
}

#[tokio::test]
async fn given_initiated_recording_when_activating_second_then_constraint_violation() {
    let test_pg = TestPostgres::new().await;
    let room = create_room(&test_pg, "Reactivated").await;

    let first = Recording::new(room.id, RecordingMode::ScreenRecording);
    test_pg.recording_repository.create(&first).await.unwrap();
    test_pg
        .recording_repository
        .update_status(first.id, RecordingStatus::Initiated, RecordingStatus::Aborted, None)
        .await
        .unwrap();
    let second = Recording::new(room.id, RecordingMode::ScreenRecording);
    test_pg.recording_repository.create(&second).await.unwrap();

    let result = test_pg
        .recording_repository
        .update_status(first.id, RecordingStatus::Aborted, RecordingStatus::Active, None)
        .await;

    assert!(matches!(
        result,
        Err(RepositoryError::ConstraintViolation(_))
    ));
}

#[tokio::test]
async fn given_unknown_status_value_when_inserting_raw_then_check_constraint_rejects() {
    let test_pg = TestPostgres::new().await;
    let room = create_room(&test_pg, "Checked").await;

    let result = sqlx::query(
        "INSERT INTO recordings (id, room_id, mode, status, created_at, updated_at) \
         VALUES ($1, $2, 'screen_recording', 'paused', NOW(), NOW())",
    )
    .bind(uuid::Uuid::new_v4())
    .bind(room.id.as_uuid())
    .execute(&test_pg.pool)
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn given_concurrent_updates_from_initiated_when_racing_then_exactly_one_applies() {
    let test_pg = TestPostgres::new().await;
    let room = create_room(&test_pg, "Raced").await;
    let recording = Recording::new(room.id, RecordingMode::ScreenRecording);
    test_pg.recording_repository.create(&recording).await.unwrap();
    let repository = Arc::new(PgRecordingRepository::new(test_pg.pool.clone()));
    let targets = [
        RecordingStatus::Active,
        RecordingStatus::FailedToStart,
        RecordingStatus::Aborted,
        RecordingStatus::Active,
        RecordingStatus::FailedToStart,
        RecordingStatus::Aborted,
    ];

    let attempts = targets.into_iter().map(|target| {
        let repository = Arc::clone(&repository);
        let id = recording.id;
        tokio::spawn(async move {
            let outcome = repository
                .update_status(id, RecordingStatus::Initiated, target, None)
                .await;
            (target, outcome)
        })
    });
    let results: Vec<_> = join_all(attempts)
        .await
        .into_iter()
        .map(|joined| joined.expect("Update task panicked"))
        .collect();

    let applied: Vec<_> = results
        .iter()
        .filter(|(_, outcome)| outcome.is_ok())
        .map(|(target, _)| *target)
        .collect();
    assert_eq!(applied.len(), 1);
    assert!(
        results
            .iter()
            .filter(|(_, outcome)| outcome.is_err())
            .all(|(_, outcome)| matches!(outcome, Err(RepositoryError::Conflict(_))))
    );
    let stored = test_pg
        .recording_repository
        .get_by_id(recording.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, applied[0]);
}

#[tokio::test]
async fn given_terminal_recording_when_stale_update_lands_then_conflict_and_row_untouched() {
    let test_pg = TestPostgres::new().await;
    let room = create_room(&test_pg, "Stale").await;
    let recording = Recording::new(room.id, RecordingMode::ScreenRecording);
    test_pg.recording_repository.create(&recording).await.unwrap();
    test_pg
        .recording_repository
        .update_status(
            recording.id,
            RecordingStatus::Initiated,
            RecordingStatus::FailedToStart,
            None,
        )
        .await
        .unwrap();

    let result = test_pg
        .recording_repository
        .update_status(
            recording.id,
            RecordingStatus::Initiated,
            RecordingStatus::Active,
            Some("worker-9"),
        )
        .await;

    assert!(matches!(result, Err(RepositoryError::Conflict(_))));
    let stored = test_pg
        .recording_repository
        .get_by_id(recording.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, RecordingStatus::FailedToStart);
    assert!(stored.worker_id.is_none());
}

#[tokio::test]
async fn given_unknown_recording_when_updating_then_not_found() {
    let test_pg = TestPostgres::new().await;

    let result = test_pg
        .recording_repository
        .update_status(
            RecordingId::new(),
            RecordingStatus::Initiated,
            RecordingStatus::Active,
            None,
        )
        .await;

    assert!(matches!(result, Err(RepositoryError::NotFound(_))));
}

#[tokio::test]
async fn given_two_service_transitions_reading_same_status_when_racing_then_terminal_status_holds() {
    let test_pg = TestPostgres::new().await;
    let room = create_room(&test_pg, "Service race").await;
    let slow = Arc::new(SlowReadRecordingRepository::new(
        Arc::new(PgRecordingRepository::new(test_pg.pool.clone())) as Arc<dyn RecordingRepository>,
        Duration::from_millis(100),
    ));
    let service = RecordingService::new(
        slow as Arc<dyn RecordingRepository>,
        Arc::new(PgRoomRepository::new(test_pg.pool.clone())) as Arc<dyn RoomRepository>,
    );
    let recording = service
        .start_recording(room.id, RecordingMode::ScreenRecording)
        .await
        .unwrap();

    let (failed, activated) = tokio::join!(
        service.transition(recording.id, RecordingStatus::FailedToStart, None),
        service.transition(recording.id, RecordingStatus::Active, Some("worker-1")),
    );

    let winner = match (failed, activated) {
        (Ok(winner), Err(RecordingServiceError::StatusChanged { .. }))
        | (Err(RecordingServiceError::StatusChanged { .. }), Ok(winner)) => winner,
        other => panic!("expected exactly one transition to apply, got {other:?}"),
    };
    let stored = test_pg
        .recording_repository
        .get_by_id(recording.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, winner.status);
}
