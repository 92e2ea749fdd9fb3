use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use super::error::{error_response, parse_id, repository_error_response};
use crate::domain::{ResourceAccess, ResourceAccessId, RoleLevel, RoomId, UserId};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ResourceAccessResponse {
    pub id: String,
    pub user: String,
    pub resource: String,
    pub role: String,
}

impl From<ResourceAccess> for ResourceAccessResponse {
    fn from(access: ResourceAccess) -> Self {
        Self {
            id: access.id.to_string(),
            user: access.user_id.to_string(),
            resource: access.room_id.to_string(),
            role: access.role.as_str().to_string(),
        }
    }
}

#[derive(Deserialize)]
pub struct CreateResourceAccessRequest {
    pub user: String,
    pub resource: String,
    pub role: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct ResourceAccessQuery {
    pub room: Option<String>,
}

#[tracing::instrument(skip(state))]
pub async fn list_resource_accesses_handler(
    State(state): State<AppState>,
    Query(query): Query<ResourceAccessQuery>,
) -> impl IntoResponse {
    let room_id = match query.room.as_deref().map(|raw| parse_id(raw, "room")) {
        Some(Ok(uuid)) => Some(RoomId::from_uuid(uuid)),
        Some(Err(response)) => return response,
        None => None,
    };

    match state.access_repository.list(room_id).await {
        Ok(accesses) => {
            let body: Vec<ResourceAccessResponse> = accesses
                .into_iter()
                .map(ResourceAccessResponse::from)
                .collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => repository_error_response(e),
    }
}

#[tracing::instrument(skip(state, body))]
pub async fn create_resource_access_handler(
    State(state): State<AppState>,
    Json(body): Json<CreateResourceAccessRequest>,
) -> impl IntoResponse {
    let user_id = match parse_id(&body.user, "user") {
        Ok(u) => UserId::from_uuid(u),
        Err(response) => return response,
    };
    let room_id = match parse_id(&body.resource, "room") {
        Ok(u) => RoomId::from_uuid(u),
        Err(response) => return response,
    };
    let role = match body.role.as_deref().map(str::parse::<RoleLevel>).transpose() {
        Ok(role) => role.unwrap_or_default(),
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e),
    };

    match state.user_repository.get_by_id(user_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return error_response(
                StatusCode::NOT_FOUND,
                format!("User not found: {}", user_id),
            );
        }
        Err(e) => return repository_error_response(e),
    }
    match state.room_repository.get_by_id(room_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return error_response(
                StatusCode::NOT_FOUND,
                format!("Room not found: {}", room_id),
            );
        }
        Err(e) => return repository_error_response(e),
    }

    let access = ResourceAccess::new(user_id, room_id, role);
    match state.access_repository.create(&access).await {
        Ok(()) => {
            tracing::info!(access_id = %access.id, role = %role, "Resource access granted");
            (StatusCode::CREATED, Json(ResourceAccessResponse::from(access))).into_response()
        }
        Err(e) => repository_error_response(e),
    }
}

#[tracing::instrument(skip(state))]
pub async fn delete_resource_access_handler(
    State(state): State<AppState>,
    Path(access_id): Path<String>,
) -> impl IntoResponse {
    let uuid = match parse_id(&access_id, "resource access") {
        Ok(u) => u,
        Err(response) => return response,
    };

    match state
        .access_repository
        .delete(ResourceAccessId::from_uuid(uuid))
        .await
    {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => error_response(
            StatusCode::NOT_FOUND,
            format!("Resource access not found: {}", access_id),
        ),
        Err(e) => repository_error_response(e),
    }
}
