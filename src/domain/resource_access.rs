use chrono::{DateTime, Utc};

use super::{ResourceAccessId, RoleLevel, RoomId, UserId};

/// Grants a user a role on a room.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceAccess {
    pub id: ResourceAccessId,
    pub user_id: UserId,
    pub room_id: RoomId,
    pub role: RoleLevel,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResourceAccess {
    pub fn new(user_id: UserId, room_id: RoomId, role: RoleLevel) -> Self {
        let now = Utc::now();
        Self {
            id: ResourceAccessId::new(),
            user_id,
            room_id,
            role,
            created_at: now,
            updated_at: now,
        }
    }
}
