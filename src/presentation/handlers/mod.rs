mod error;
mod health;
mod invite;
mod recordings;
mod resource_accesses;
mod rooms;
mod summary_tasks;
mod users;

pub use error::ErrorResponse;
pub use health::health_handler;
pub use invite::invite_handler;
pub use recordings::{
    get_recording_handler, list_recordings_handler, start_recording_handler,
    stop_recording_handler, update_recording_handler,
};
pub use resource_accesses::{
    create_resource_access_handler, delete_resource_access_handler,
    list_resource_accesses_handler,
};
pub use rooms::{
    create_room_handler, delete_room_handler, get_room_handler, list_rooms_handler,
    update_room_handler,
};
pub use summary_tasks::{create_summary_task_handler, get_summary_task_handler};
pub use users::{create_user_handler, get_user_handler, list_users_handler, update_user_handler};
