use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use uuid::Uuid;

use crate::application::ports::RepositoryError;
use crate::application::services::{RecordingServiceError, RoomServiceError};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

pub fn parse_id(raw: &str, kind: &str) -> Result<Uuid, Response> {
    Uuid::parse_str(raw)
        .map_err(|_| error_response(StatusCode::BAD_REQUEST, format!("Invalid {} ID: {}", kind, raw)))
}

pub fn repository_error_response(error: RepositoryError) -> Response {
    match error {
        RepositoryError::NotFound(what) => {
            error_response(StatusCode::NOT_FOUND, format!("Not found: {}", what))
        }
        RepositoryError::Conflict(reason) => error_response(StatusCode::CONFLICT, reason),
        RepositoryError::ConstraintViolation(constraint) => error_response(
            StatusCode::CONFLICT,
            format!("Constraint violation: {}", constraint),
        ),
        other => {
            tracing::error!(error = %other, "Repository operation failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
        }
    }
}

pub fn recording_error_response(error: RecordingServiceError) -> Response {
    match error {
        RecordingServiceError::RoomNotFound(_)
        | RecordingServiceError::NotFound(_)
        | RecordingServiceError::NoOngoingRecording(_) => {
            error_response(StatusCode::NOT_FOUND, error.to_string())
        }
        RecordingServiceError::AlreadyRecording(_) | RecordingServiceError::StatusChanged { .. } => {
            error_response(StatusCode::CONFLICT, error.to_string())
        }
        RecordingServiceError::InvalidTransition { .. } => {
            error_response(StatusCode::UNPROCESSABLE_ENTITY, error.to_string())
        }
        RecordingServiceError::Repository(e) => repository_error_response(e),
    }
}

pub fn room_error_response(error: RoomServiceError) -> Response {
    match error {
        RoomServiceError::InvalidName(_) => {
            error_response(StatusCode::BAD_REQUEST, error.to_string())
        }
        RoomServiceError::SlugTaken(_) => error_response(StatusCode::CONFLICT, error.to_string()),
        RoomServiceError::RoomNotFound(_) | RoomServiceError::UserNotFound(_) => {
            error_response(StatusCode::NOT_FOUND, error.to_string())
        }
        RoomServiceError::Repository(e) => repository_error_response(e),
    }
}
