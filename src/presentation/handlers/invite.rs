use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use super::error::{error_response, parse_id, room_error_response};
use crate::domain::RoomId;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct InviteRequest {
    pub room: String,
    pub emails: Vec<String>,
}

#[derive(Serialize)]
pub struct InviteResponse {
    pub invited: Vec<String>,
    pub already_members: Vec<String>,
    pub unknown: Vec<String>,
}

#[tracing::instrument(skip(state, body), fields(room = %body.room))]
pub async fn invite_handler(
    State(state): State<AppState>,
    Json(body): Json<InviteRequest>,
) -> impl IntoResponse {
    let room_id = match parse_id(&body.room, "room") {
        Ok(u) => RoomId::from_uuid(u),
        Err(response) => return response,
    };

    if body.emails.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "No emails provided");
    }

    match state.room_service.invite(room_id, &body.emails).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(InviteResponse {
                invited: outcome.invited,
                already_members: outcome.already_members,
                unknown: outcome.unknown,
            }),
        )
            .into_response(),
        Err(e) => room_error_response(e),
    }
}
