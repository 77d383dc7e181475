// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::rooms::models::Room;
use crate::domain::rooms::repos::{ConnectedRoomsRepository, RoomAlreadyExistsError};
use crate::domain::shared::models::RoomId;

pub struct InMemoryConnectedRoomsRepository {
    rooms: RwLock<HashMap<RoomId, Arc<Room>>>,
}

impl InMemoryConnectedRoomsRepository {
    pub fn new() -> Self {
        InMemoryConnectedRoomsRepository {
            rooms: Default::default(),
        }
    }
}

impl ConnectedRoomsRepository for InMemoryConnectedRoomsRepository {
    fn get(&self, room_id: &RoomId) -> Option<Arc<Room>> {
        self.rooms.read().get(room_id).cloned()
    }

    fn get_all(&self) -> Vec<Arc<Room>> {
        let mut rooms = self.rooms.read().values().cloned().collect::<Vec<_>>();
        rooms.sort_by_key(|room| std::cmp::Reverse(room.last_activity_at()));
        rooms
    }

    fn set(&self, room: Room) -> Result<(), RoomAlreadyExistsError> {
        let mut rooms = self.rooms.write();

        if rooms.contains_key(room.id()) {
            return Err(RoomAlreadyExistsError);
        }

        rooms.insert(room.id().clone(), Arc::new(room));
        Ok(())
    }

    fn delete_all(&self) -> Vec<Arc<Room>> {
        self.rooms.write().drain().map(|(_, room)| room).collect()
    }
}
