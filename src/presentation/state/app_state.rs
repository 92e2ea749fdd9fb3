use std::sync::Arc;

use crate::application::ports::{ResourceAccessRepository, RoomRepository, UserRepository};
use crate::application::services::{RecordingService, RoomService};
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub user_repository: Arc<dyn UserRepository>,
    pub room_repository: Arc<dyn RoomRepository>,
    pub access_repository: Arc<dyn ResourceAccessRepository>,
    pub recording_service: Arc<RecordingService>,
    pub room_service: Arc<RoomService>,
    pub settings: Settings,
}
