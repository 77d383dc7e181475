// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use url::Url;

use crate::domain::rooms::models::{Member, Room, RoomKind};
use crate::domain::shared::models::{RoomId, UserId};

#[derive(Debug, Clone, PartialEq)]
pub struct RoomDto {
    pub id: RoomId,
    pub kind: RoomKind,
    pub name: String,
    pub avatar: Option<Url>,
    pub members: Vec<Member>,
    pub last_activity_at: DateTime<Utc>,
    pub unread_count: u32,
}

impl RoomDto {
    pub fn for_room(room: &Room, current_user: &UserId) -> Self {
        RoomDto {
            id: room.id().clone(),
            kind: room.kind().clone(),
            name: room.display_name(current_user),
            avatar: room.display_avatar(current_user),
            members: room.members(),
            last_activity_at: room.last_activity_at(),
            unread_count: room.unread_count(),
        }
    }
}
