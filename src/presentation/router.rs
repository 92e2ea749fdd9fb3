use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::auth::api_token_middleware;
use crate::presentation::handlers::{
    create_resource_access_handler, create_room_handler, create_summary_task_handler,
    create_user_handler, delete_resource_access_handler, delete_room_handler,
    get_recording_handler, get_room_handler, get_summary_task_handler, get_user_handler,
    health_handler, invite_handler, list_recordings_handler, list_resource_accesses_handler,
    list_rooms_handler, list_users_handler, start_recording_handler, stop_recording_handler,
    update_recording_handler, update_room_handler, update_user_handler,
};
use crate::presentation::state::{AppState, SummaryState};

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}

/// Room service routes, mounted under `/api/{version}`.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/users/", get(list_users_handler).post(create_user_handler))
        .route(
            "/users/{user_id}/",
            get(get_user_handler).patch(update_user_handler),
        )
        .route("/rooms/", get(list_rooms_handler).post(create_room_handler))
        .route(
            "/rooms/{room_id}/",
            get(get_room_handler)
                .patch(update_room_handler)
                .delete(delete_room_handler),
        )
        .route(
            "/rooms/{room_id}/recordings/",
            get(list_recordings_handler).post(start_recording_handler),
        )
        .route(
            "/rooms/{room_id}/stop-recording/",
            post(stop_recording_handler),
        )
        .route(
            "/recordings/{recording_id}/",
            get(get_recording_handler).patch(update_recording_handler),
        )
        .route(
            "/resource-accesses/",
            get(list_resource_accesses_handler).post(create_resource_access_handler),
        )
        .route(
            "/resource-accesses/{access_id}/",
            axum::routing::delete(delete_resource_access_handler),
        )
        .route("/invite/", post(invite_handler));

    let prefix = format!("/api/{}", state.settings.api.version);

    Router::new()
        .route("/health", get(health_handler))
        .nest(&prefix, api)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer())
        .layer(cors_layer())
        .with_state(state)
}

/// Summary worker routes. Task endpoints require the API bearer token.
pub fn create_summary_router(state: SummaryState) -> Router {
    let tasks = Router::new()
        .route("/api/v1/tasks/", post(create_summary_task_handler))
        .route("/api/v1/tasks/{task_id}", get(get_summary_task_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            api_token_middleware,
        ));

    Router::new()
        .route("/health", get(health_handler))
        .merge(tasks)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer())
        .layer(cors_layer())
        .with_state(state)
}
