mod in_memory_repository;
mod pg_recording_repository;
mod pg_resource_access_repository;
mod pg_room_repository;
mod pg_user_repository;

pub use in_memory_repository::{
    InMemoryRecordingRepository, InMemoryResourceAccessRepository, InMemoryRoomRepository,
    InMemorySummaryTaskRepository, InMemoryUserRepository,
};
pub use pg_recording_repository::PgRecordingRepository;
pub use pg_resource_access_repository::PgResourceAccessRepository;
pub use pg_room_repository::PgRoomRepository;
pub use pg_user_repository::PgUserRepository;
