mod llm_client;
mod recording_repository;
mod recording_store;
mod repository_error;
mod resource_access_repository;
mod room_repository;
mod summary_task_repository;
mod transcription_engine;
mod user_repository;
mod webhook_notifier;

pub use llm_client::{LlmClient, LlmClientError};
pub use recording_repository::{ONGOING_RECORDING_GUARD, RecordingRepository};
pub use recording_store::{RecordingStore, RecordingStoreError};
pub use repository_error::RepositoryError;
pub use resource_access_repository::ResourceAccessRepository;
pub use room_repository::RoomRepository;
pub use summary_task_repository::SummaryTaskRepository;
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
pub use user_repository::UserRepository;
pub use webhook_notifier::{SummaryPayload, WebhookError, WebhookNotifier};
