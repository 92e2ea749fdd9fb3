mod pg_pool;
mod repositories;

pub use repositories::InMemoryRecordingRepository;
pub use repositories::InMemoryResourceAccessRepository;
pub use repositories::InMemoryRoomRepository;
pub use repositories::InMemorySummaryTaskRepository;
pub use repositories::InMemoryUserRepository;
pub use repositories::PgRecordingRepository;
pub use repositories::PgResourceAccessRepository;
pub use repositories::PgRoomRepository;
pub use repositories::PgUserRepository;

pub use pg_pool::{create_pool, run_migrations};
