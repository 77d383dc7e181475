// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::messaging::models::Message;
use crate::domain::shared::models::{MessageId, MessageLocalId, RoomId};

pub type MessageUpdateHandler = Box<dyn FnOnce(&mut Message) + Send>;

/// The in-memory window of loaded messages, one window per room. Messages are kept ordered by
/// `(created_at, insertion sequence)`; replacing an entry keeps its slot so that an optimistic
/// message does not jump around once the gateway confirms it. Only the sync engine writes here.
#[cfg_attr(any(test, feature = "test"), mockall::automock)]
pub trait MessagesRepository: Send + Sync {
    fn get(&self, room_id: &RoomId, id: &MessageId) -> Option<Message>;

    /// All loaded messages of `room_id`, oldest first. Tombstones included.
    fn get_all(&self, room_id: &RoomId) -> Vec<Message>;

    fn contains(&self, room_id: &RoomId, id: &MessageId) -> bool;

    fn append(&self, room_id: &RoomId, message: Message);

    /// Replaces the message with the same id in place, or appends when unknown. Returns `true`
    /// if an existing entry was replaced.
    fn upsert(&self, room_id: &RoomId, message: Message) -> bool;

    /// Mutates the message with the given id and returns the updated copy.
    fn update(
        &self,
        room_id: &RoomId,
        id: &MessageId,
        block: MessageUpdateHandler,
    ) -> Option<Message>;

    /// Swaps the provisional entry carrying `local_id` for the authoritative message while
    /// keeping its position. Returns `false` when no such entry exists.
    fn replace_local(&self, room_id: &RoomId, local_id: &MessageLocalId, message: Message)
        -> bool;

    /// Rollback of an optimistic insert. Returns the removed message.
    fn remove_local(&self, room_id: &RoomId, local_id: &MessageLocalId) -> Option<Message>;

    fn clear(&self, room_id: &RoomId);
}
