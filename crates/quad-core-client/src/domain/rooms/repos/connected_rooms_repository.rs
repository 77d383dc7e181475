// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::domain::rooms::models::Room;
use crate::domain::shared::models::RoomId;

#[derive(Debug)]
pub struct RoomAlreadyExistsError;

/// The in-memory set of rooms the client knows about. Rooms carry interior mutability for their
/// state; the repository only manages identity and ordering.
#[cfg_attr(any(test, feature = "test"), mockall::automock)]
pub trait ConnectedRoomsRepository: Send + Sync {
    fn get(&self, room_id: &RoomId) -> Option<Arc<Room>>;

    /// All rooms, ordered by `last_activity_at`, most recent first.
    fn get_all(&self) -> Vec<Arc<Room>>;

    /// Fails when a room with the same id is already tracked; the tracked room wins so that
    /// purely local state like unread counts survives.
    fn set(&self, room: Room) -> Result<(), RoomAlreadyExistsError>;

    fn delete_all(&self) -> Vec<Arc<Room>>;
}
