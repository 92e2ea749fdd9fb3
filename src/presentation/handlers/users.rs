use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use super::error::{error_response, parse_id, repository_error_response};
use crate::domain::{Language, User, UserId};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub sub: Option<String>,
    pub email: String,
    pub full_name: Option<String>,
    pub language: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            sub: user.sub,
            email: user.email,
            full_name: user.full_name,
            language: user.language.as_str().to_string(),
            created_at: user.created_at.to_rfc3339(),
            updated_at: user.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub full_name: Option<String>,
    pub language: Option<String>,
    pub sub: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub full_name: Option<String>,
    pub language: Option<String>,
}

fn parse_language(raw: Option<&str>) -> Result<Option<Language>, axum::response::Response> {
    raw.map(|l| l.parse::<Language>())
        .transpose()
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, e))
}

#[tracing::instrument(skip(state))]
pub async fn list_users_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.user_repository.list().await {
        Ok(users) => {
            let body: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => repository_error_response(e),
    }
}

#[tracing::instrument(skip(state, body), fields(email = %body.email))]
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> impl IntoResponse {
    let email = body.email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return error_response(
            StatusCode::BAD_REQUEST,
            format!("Invalid email: {}", body.email),
        );
    }

    let language = match parse_language(body.language.as_deref()) {
        Ok(l) => l,
        Err(response) => return response,
    };

    let mut user = User::new(email, body.full_name, language);
    if let Some(sub) = body.sub {
        user = user.with_sub(sub);
    }

    match state.user_repository.create(&user).await {
        Ok(()) => {
            tracing::info!(user_id = %user.id, "User created");
            (StatusCode::CREATED, Json(UserResponse::from(user))).into_response()
        }
        Err(e) => repository_error_response(e),
    }
}

#[tracing::instrument(skip(state))]
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    let uuid = match parse_id(&user_id, "user") {
        Ok(u) => u,
        Err(response) => return response,
    };

    match state.user_repository.get_by_id(UserId::from_uuid(uuid)).await {
        Ok(Some(user)) => (StatusCode::OK, Json(UserResponse::from(user))).into_response(),
        Ok(None) => error_response(
            StatusCode::NOT_FOUND,
            format!("User not found: {}", user_id),
        ),
        Err(e) => repository_error_response(e),
    }
}

#[tracing::instrument(skip(state, body))]
pub async fn update_user_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<UpdateUserRequest>,
) -> impl IntoResponse {
    let uuid = match parse_id(&user_id, "user") {
        Ok(u) => u,
        Err(response) => return response,
    };

    let language = match parse_language(body.language.as_deref()) {
        Ok(l) => l,
        Err(response) => return response,
    };

    let mut user = match state.user_repository.get_by_id(UserId::from_uuid(uuid)).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return error_response(
                StatusCode::NOT_FOUND,
                format!("User not found: {}", user_id),
            );
        }
        Err(e) => return repository_error_response(e),
    };

    if let Some(full_name) = body.full_name {
        user.full_name = Some(full_name);
    }
    if let Some(language) = language {
        user.language = language;
    }
    user.updated_at = chrono::Utc::now();

    match state.user_repository.update(&user).await {
        Ok(()) => (StatusCode::OK, Json(UserResponse::from(user))).into_response(),
        Err(e) => repository_error_response(e),
    }
}
