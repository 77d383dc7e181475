// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::app::dtos::MessageNotification;
use crate::domain::shared::models::{MessageId, RoomId};

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// The room list changed: order, names, unread counters or membership.
    SidebarChanged,

    /// Something within a room changed.
    RoomChanged {
        room_id: RoomId,
        r#type: RoomEventType,
    },

    /// An inbound message arrived in a room that is not currently open.
    MessageNotification { notification: MessageNotification },
}

#[derive(Debug, Clone, PartialEq)]
pub enum RoomEventType {
    /// New messages entered the loaded window.
    MessagesAppended { message_ids: Vec<MessageId> },

    /// Messages in the window changed: edits, reactions or a confirmed send.
    MessagesUpdated { message_ids: Vec<MessageId> },

    /// Messages became tombstones or left the window.
    MessagesDeleted { message_ids: Vec<MessageId> },

    /// The set of typing users changed.
    ComposingUsersChanged,

    /// Attributes like the room name changed.
    AttributesChanged,
}
