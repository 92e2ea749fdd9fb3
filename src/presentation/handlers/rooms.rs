use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{error_response, parse_id, repository_error_response, room_error_response};
use crate::domain::{Room, RoomId, UserId, slugify};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct RoomResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub is_public: bool,
    pub configuration: Value,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self {
            id: room.id.to_string(),
            name: room.name,
            slug: room.slug,
            is_public: room.is_public,
            configuration: room.configuration,
            created_at: room.created_at.to_rfc3339(),
            updated_at: room.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Deserialize)]
pub struct CreateRoomRequest {
    pub name: String,
    #[serde(default = "default_is_public")]
    pub is_public: bool,
    pub configuration: Option<Value>,
    pub owner_id: Option<String>,
}

fn default_is_public() -> bool {
    true
}

#[derive(Deserialize)]
pub struct UpdateRoomRequest {
    pub name: Option<String>,
    pub is_public: Option<bool>,
    pub configuration: Option<Value>,
}

#[tracing::instrument(skip(state))]
pub async fn list_rooms_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.room_repository.list().await {
        Ok(rooms) => {
            let body: Vec<RoomResponse> = rooms.into_iter().map(RoomResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => repository_error_response(e),
    }
}

#[tracing::instrument(skip(state, body), fields(name = %body.name))]
pub async fn create_room_handler(
    State(state): State<AppState>,
    Json(body): Json<CreateRoomRequest>,
) -> impl IntoResponse {
    if matches!(&body.configuration, Some(c) if !c.is_object()) {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Room configuration must be a JSON object",
        );
    }

    let owner_id = match body.owner_id.as_deref().map(|raw| parse_id(raw, "user")) {
        Some(Ok(uuid)) => Some(UserId::from_uuid(uuid)),
        Some(Err(response)) => return response,
        None => None,
    };

    match state
        .room_service
        .create_room(body.name, body.is_public, body.configuration, owner_id)
        .await
    {
        Ok(room) => (StatusCode::CREATED, Json(RoomResponse::from(room))).into_response(),
        Err(e) => room_error_response(e),
    }
}

#[tracing::instrument(skip(state))]
pub async fn get_room_handler(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> impl IntoResponse {
    let uuid = match parse_id(&room_id, "room") {
        Ok(u) => u,
        Err(response) => return response,
    };

    match state.room_repository.get_by_id(RoomId::from_uuid(uuid)).await {
        Ok(Some(room)) => (StatusCode::OK, Json(RoomResponse::from(room))).into_response(),
        Ok(None) => error_response(
            StatusCode::NOT_FOUND,
            format!("Room not found: {}", room_id),
        ),
        Err(e) => repository_error_response(e),
    }
}

#[tracing::instrument(skip(state, body))]
pub async fn update_room_handler(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    Json(body): Json<UpdateRoomRequest>,
) -> impl IntoResponse {
    let uuid = match parse_id(&room_id, "room") {
        Ok(u) => u,
        Err(response) => return response,
    };

    let mut room = match state.room_repository.get_by_id(RoomId::from_uuid(uuid)).await {
        Ok(Some(room)) => room,
        Ok(None) => {
            return error_response(
                StatusCode::NOT_FOUND,
                format!("Room not found: {}", room_id),
            );
        }
        Err(e) => return repository_error_response(e),
    };

    if let Some(name) = body.name {
        let Some(slug) = slugify(&name) else {
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Room name yields an empty slug: {:?}", name),
            );
        };
        room.name = name;
        room.slug = slug;
    }
    if let Some(is_public) = body.is_public {
        room.is_public = is_public;
    }
    if let Some(configuration) = body.configuration {
        if !configuration.is_object() {
            return error_response(
                StatusCode::BAD_REQUEST,
                "Room configuration must be a JSON object",
            );
        }
        room.configuration = configuration;
    }
    room.updated_at = chrono::Utc::now();

    match state.room_repository.update(&room).await {
        Ok(()) => (StatusCode::OK, Json(RoomResponse::from(room))).into_response(),
        Err(e) => repository_error_response(e),
    }
}

#[tracing::instrument(skip(state))]
pub async fn delete_room_handler(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> impl IntoResponse {
    let uuid = match parse_id(&room_id, "room") {
        Ok(u) => u,
        Err(response) => return response,
    };

    match state.room_repository.delete(RoomId::from_uuid(uuid)).await {
        Ok(true) => {
            tracing::info!(room_id = %room_id, "Room deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Ok(false) => error_response(
            StatusCode::NOT_FOUND,
            format!("Room not found: {}", room_id),
        ),
        Err(e) => repository_error_response(e),
    }
}
