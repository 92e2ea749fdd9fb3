mod ids;
mod language;
mod recording;
mod recording_mode;
mod recording_status;
mod resource_access;
mod role;
mod room;
mod summary_task;
mod user;

pub use ids::{RecordingId, ResourceAccessId, RoomId, SummaryTaskId, UserId};
pub use language::Language;
pub use recording::Recording;
pub use recording_mode::RecordingMode;
pub use recording_status::RecordingStatus;
pub use resource_access::ResourceAccess;
pub use role::RoleLevel;
pub use room::{Room, slugify};
pub use summary_task::{SummaryTask, SummaryTaskStatus};
pub use user::User;
