use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use meet::application::ports::{
    RecordingRepository, ResourceAccessRepository, RoomRepository, UserRepository,
};
use meet::application::services::{RecordingService, RoomService};
use meet::infrastructure::observability::{TracingConfig, init_tracing, redact_url_credentials};
use meet::infrastructure::persistence::{
    PgRecordingRepository, PgResourceAccessRepository, PgRoomRepository, PgUserRepository,
    create_pool, run_migrations,
};
use meet::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;

    let tracing_config = TracingConfig::default()
        .with_level(&settings.logging.level)
        .with_json(settings.logging.enable_json);
    init_tracing(&tracing_config, "meet")?;

    tracing::info!(
        database = %redact_url_credentials(&settings.database.url),
        api_version = %settings.api.version,
        "Connecting to database"
    );

    let pool = create_pool(&settings.database.url, settings.database.max_connections).await?;
    if settings.database.run_migrations {
        run_migrations(&pool).await?;
    }

    let user_repository: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(pool.clone()));
    let room_repository: Arc<dyn RoomRepository> = Arc::new(PgRoomRepository::new(pool.clone()));
    let access_repository: Arc<dyn ResourceAccessRepository> =
        Arc::new(PgResourceAccessRepository::new(pool.clone()));
    let recording_repository: Arc<dyn RecordingRepository> =
        Arc::new(PgRecordingRepository::new(pool));

    let recording_service = Arc::new(RecordingService::new(
        Arc::clone(&recording_repository),
        Arc::clone(&room_repository),
    ));
    let room_service = Arc::new(RoomService::new(
        Arc::clone(&room_repository),
        Arc::clone(&user_repository),
        Arc::clone(&access_repository),
    ));

    let addr: SocketAddr =
        format!("{}:{}", settings.server.host, settings.server.port).parse()?;

    let state = AppState {
        user_repository,
        room_repository,
        access_repository,
        recording_service,
        room_service,
        settings,
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
