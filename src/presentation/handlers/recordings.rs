use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use super::error::{error_response, parse_id, recording_error_response};
use crate::domain::{Recording, RecordingId, RecordingMode, RecordingStatus, RoomId};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct RecordingResponse {
    pub id: String,
    pub room: String,
    pub mode: String,
    pub status: String,
    pub worker_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Recording> for RecordingResponse {
    fn from(recording: Recording) -> Self {
        Self {
            id: recording.id.to_string(),
            room: recording.room_id.to_string(),
            mode: recording.mode.as_str().to_string(),
            status: recording.status.as_str().to_string(),
            worker_id: recording.worker_id,
            created_at: recording.created_at.to_rfc3339(),
            updated_at: recording.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Deserialize)]
pub struct StartRecordingRequest {
    pub mode: String,
}

#[derive(Deserialize)]
pub struct UpdateRecordingRequest {
    pub status: String,
    pub worker_id: Option<String>,
}

#[tracing::instrument(skip(state))]
pub async fn list_recordings_handler(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> impl IntoResponse {
    let uuid = match parse_id(&room_id, "room") {
        Ok(u) => u,
        Err(response) => return response,
    };

    match state
        .recording_service
        .list_for_room(RoomId::from_uuid(uuid))
        .await
    {
        Ok(recordings) => {
            let body: Vec<RecordingResponse> = recordings
                .into_iter()
                .map(RecordingResponse::from)
                .collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => recording_error_response(e),
    }
}

#[tracing::instrument(skip(state, body), fields(mode = %body.mode))]
pub async fn start_recording_handler(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    Json(body): Json<StartRecordingRequest>,
) -> impl IntoResponse {
    let uuid = match parse_id(&room_id, "room") {
        Ok(u) => u,
        Err(response) => return response,
    };

    let mode = match body.mode.parse::<RecordingMode>() {
        Ok(m) => m,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e),
    };

    match state
        .recording_service
        .start_recording(RoomId::from_uuid(uuid), mode)
        .await
    {
        Ok(recording) => {
            (StatusCode::CREATED, Json(RecordingResponse::from(recording))).into_response()
        }
        Err(e) => recording_error_response(e),
    }
}

#[tracing::instrument(skip(state))]
pub async fn stop_recording_handler(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> impl IntoResponse {
    let uuid = match parse_id(&room_id, "room") {
        Ok(u) => u,
        Err(response) => return response,
    };

    match state
        .recording_service
        .stop_recording(RoomId::from_uuid(uuid))
        .await
    {
        Ok(recording) => (StatusCode::OK, Json(RecordingResponse::from(recording))).into_response(),
        Err(e) => recording_error_response(e),
    }
}

#[tracing::instrument(skip(state))]
pub async fn get_recording_handler(
    State(state): State<AppState>,
    Path(recording_id): Path<String>,
) -> impl IntoResponse {
    let uuid = match parse_id(&recording_id, "recording") {
        Ok(u) => u,
        Err(response) => return response,
    };

    match state
        .recording_service
        .get(RecordingId::from_uuid(uuid))
        .await
    {
        Ok(recording) => (StatusCode::OK, Json(RecordingResponse::from(recording))).into_response(),
        Err(e) => recording_error_response(e),
    }
}

#[tracing::instrument(skip(state, body), fields(status = %body.status))]
pub async fn update_recording_handler(
    State(state): State<AppState>,
    Path(recording_id): Path<String>,
    Json(body): Json<UpdateRecordingRequest>,
) -> impl IntoResponse {
    let uuid = match parse_id(&recording_id, "recording") {
        Ok(u) => u,
        Err(response) => return response,
    };

    let status = match body.status.parse::<RecordingStatus>() {
        Ok(s) => s,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e),
    };

    match state
        .recording_service
        .transition(
            RecordingId::from_uuid(uuid),
            status,
            body.worker_id.as_deref(),
        )
        .await
    {
        Ok(recording) => (StatusCode::OK, Json(RecordingResponse::from(recording))).into_response(),
        Err(e) => recording_error_response(e),
    }
}
