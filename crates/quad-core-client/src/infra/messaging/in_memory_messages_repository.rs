// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::domain::messaging::models::Message;
use crate::domain::messaging::repos::{MessagesRepository, MessageUpdateHandler};
use crate::domain::shared::models::{MessageId, MessageLocalId, RoomId};

struct StoredMessage {
    /// Monotonic insertion sequence. Breaks `created_at` ties and keeps the slot of an entry
    /// stable across optimistic-to-confirmed replacement.
    seq: u64,
    message: Message,
}

pub struct InMemoryMessagesRepository {
    rooms: RwLock<HashMap<RoomId, Vec<StoredMessage>>>,
    next_seq: AtomicU64,
}

impl InMemoryMessagesRepository {
    pub fn new() -> Self {
        InMemoryMessagesRepository {
            rooms: Default::default(),
            next_seq: AtomicU64::new(0),
        }
    }

    fn next_seq(&self) -> u64 {
        self.next_seq.fetch_add(1, Ordering::SeqCst)
    }
}

impl MessagesRepository for InMemoryMessagesRepository {
    fn get(&self, room_id: &RoomId, id: &MessageId) -> Option<Message> {
        self.rooms.read().get(room_id).and_then(|messages| {
            messages
                .iter()
                .find(|stored| &stored.message.id == id)
                .map(|stored| stored.message.clone())
        })
    }

    fn get_all(&self, room_id: &RoomId) -> Vec<Message> {
        self.rooms
            .read()
            .get(room_id)
            .map(|messages| {
                messages
                    .iter()
                    .map(|stored| stored.message.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn contains(&self, room_id: &RoomId, id: &MessageId) -> bool {
        self.rooms
            .read()
            .get(room_id)
            .map(|messages| messages.iter().any(|stored| &stored.message.id == id))
            .unwrap_or(false)
    }

    fn append(&self, room_id: &RoomId, message: Message) {
        let mut rooms = self.rooms.write();
        let messages = rooms.entry(room_id.clone()).or_default();
        let seq = self.next_seq();
        let idx = messages
            .partition_point(|stored| (stored.message.created_at, stored.seq) <= (message.created_at, seq));
        messages.insert(idx, StoredMessage { seq, message });
    }

    fn upsert(&self, room_id: &RoomId, message: Message) -> bool {
        {
            let mut rooms = self.rooms.write();
            if let Some(messages) = rooms.get_mut(room_id) {
                if let Some(stored) = messages
                    .iter_mut()
                    .find(|stored| stored.message.id == message.id)
                {
                    stored.message = message;
                    return true;
                }
            }
        }
        self.append(room_id, message);
        false
    }

    fn update(
        &self,
        room_id: &RoomId,
        id: &MessageId,
        block: MessageUpdateHandler,
    ) -> Option<Message> {
        let mut rooms = self.rooms.write();
        let messages = rooms.get_mut(room_id)?;
        let stored = messages.iter_mut().find(|stored| &stored.message.id == id)?;
        block(&mut stored.message);
        Some(stored.message.clone())
    }

    fn replace_local(
        &self,
        room_id: &RoomId,
        local_id: &MessageLocalId,
        message: Message,
    ) -> bool {
        let mut rooms = self.rooms.write();
        let Some(messages) = rooms.get_mut(room_id) else {
            return false;
        };
        let Some(stored) = messages
            .iter_mut()
            .find(|stored| stored.message.local_id.as_ref() == Some(local_id))
        else {
            return false;
        };
        // The entry keeps its seq and slot; the window is not re-sorted.
        stored.message = message;
        true
    }

    fn remove_local(&self, room_id: &RoomId, local_id: &MessageLocalId) -> Option<Message> {
        let mut rooms = self.rooms.write();
        let messages = rooms.get_mut(room_id)?;
        let idx = messages
            .iter()
            .position(|stored| stored.message.local_id.as_ref() == Some(local_id))?;
        Some(messages.remove(idx).message)
    }

    fn clear(&self, room_id: &RoomId) {
        self.rooms.write().remove(room_id);
    }
}
