// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::app::dtos::{MessageDto, RoomDto};
use crate::domain::rooms::models::ComposingUser;
use crate::domain::shared::models::ChatError;

/// A self-consistent view of the chat state, assembled under a single lock pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChatStateSnapshot {
    /// All connected rooms, most recent activity first.
    pub rooms: Vec<RoomDto>,
    pub current_room: Option<RoomDto>,
    /// The loaded message window of the current room, oldest first.
    pub messages: Vec<MessageDto>,
    /// Users currently typing in the current room, excluding the local user.
    pub typing_users: Vec<ComposingUser>,
    pub search_results: Vec<MessageDto>,
    pub is_loading: bool,
    pub last_error: Option<ChatError>,
}
