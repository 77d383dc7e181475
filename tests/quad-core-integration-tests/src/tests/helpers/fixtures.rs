// quad-core-client/quad-core-integration-tests
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use quad_core_client::dtos::{MemberRole, Message};
use quad_core_client::test::{MessageBuilder, RoomBuilder};
use quad_core_client::Room;

/// A group room with the test user ("me") as owner and Ana as a member.
pub fn group_room(id: &str, name: &str) -> Room {
    RoomBuilder::group(id, name)
        .add_member("me", "Mel River", MemberRole::Owner)
        .add_member("ana", "Ana Petrov", MemberRole::Member)
        .build()
}

pub fn dm_room(id: &str, other_id: &str, other_name: &str) -> Room {
    RoomBuilder::direct_message(id, ("me", "Mel River"), (other_id, other_name)).build()
}

/// A message from Ana in `room_id`.
pub fn inbound_message(index: u32, room_id: &str) -> Message {
    MessageBuilder::new_with_index(index)
        .set_room_id(room_id)
        .set_from("ana", "Ana Petrov")
        .build_message()
}

/// A message sent by the test user in `room_id`.
pub fn own_message(index: u32, room_id: &str) -> Message {
    MessageBuilder::new_with_index(index)
        .set_room_id(room_id)
        .set_from("me", "Mel River")
        .build_message()
}
