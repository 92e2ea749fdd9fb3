use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use super::error::{error_response, parse_id, repository_error_response};
use crate::application::services::SummaryMessage;
use crate::domain::{SummaryTask, SummaryTaskId, SummaryTaskStatus};
use crate::presentation::state::SummaryState;

#[derive(Deserialize)]
pub struct CreateSummaryTaskRequest {
    pub filename: String,
    pub email: String,
    pub sub: String,
}

#[derive(Serialize)]
pub struct SummaryTaskResponse {
    pub id: String,
    pub status: String,
    pub filename: String,
    pub error_message: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<SummaryTask> for SummaryTaskResponse {
    fn from(task: SummaryTask) -> Self {
        Self {
            id: task.id.to_string(),
            status: task.status.as_str().to_string(),
            filename: task.filename,
            error_message: task.error_message,
            created_at: task.created_at.to_rfc3339(),
            updated_at: task.updated_at.to_rfc3339(),
        }
    }
}

#[tracing::instrument(skip(state, body), fields(filename = %body.filename))]
pub async fn create_summary_task_handler(
    State(state): State<SummaryState>,
    Json(body): Json<CreateSummaryTaskRequest>,
) -> impl IntoResponse {
    if body.filename.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "filename must not be empty");
    }

    let task = SummaryTask::new(body.filename, body.email, body.sub);
    let task_id = task.id;

    if let Err(e) = state.task_repository.create(&task).await {
        tracing::error!(error = %e, "Failed to create summary task record");
        return repository_error_response(e);
    }

    let msg = SummaryMessage {
        task_id,
        filename: task.filename.clone(),
        email: task.email.clone(),
        sub: task.sub.clone(),
    };

    if let Err(e) = state.summary_sender.try_send(msg) {
        tracing::error!(error = %e, "Failed to enqueue summary task");
        let reason = "Summary queue full or worker unavailable";
        if let Err(update_err) = state
            .task_repository
            .update_status(task_id, SummaryTaskStatus::Failed, Some(reason))
            .await
        {
            tracing::warn!(error = %update_err, "Failed to mark rejected task as failed");
        }
        return error_response(StatusCode::SERVICE_UNAVAILABLE, reason);
    }

    tracing::info!(task_id = %task_id, "Summary task enqueued");

    (StatusCode::ACCEPTED, Json(SummaryTaskResponse::from(task))).into_response()
}

#[tracing::instrument(skip(state))]
pub async fn get_summary_task_handler(
    State(state): State<SummaryState>,
    Path(task_id): Path<String>,
) -> impl IntoResponse {
    let uuid = match parse_id(&task_id, "task") {
        Ok(u) => u,
        Err(response) => return response,
    };

    match state
        .task_repository
        .get_by_id(SummaryTaskId::from_uuid(uuid))
        .await
    {
        Ok(Some(task)) => (StatusCode::OK, Json(SummaryTaskResponse::from(task))).into_response(),
        Ok(None) => error_response(
            StatusCode::NOT_FOUND,
            format!("Task not found: {}", task_id),
        ),
        Err(e) => repository_error_response(e),
    }
}
