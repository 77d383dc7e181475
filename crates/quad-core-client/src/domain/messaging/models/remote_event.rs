// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::domain::messaging::models::{Emoji, Message};
use crate::domain::shared::models::{ComposeState, MessageId, RoomId, UserId};

/// A change event pushed by the gateway. Events are applied in arrival order per room and the
/// application must be structurally idempotent: the same event applied twice yields the same
/// state. This includes echoes of our own actions.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteEvent {
    /// A new message was stored, ours included.
    MessageAppended { message: Message },

    /// An earlier message changed (edit). Carries the authoritative record.
    MessageUpdated { message: Message },

    /// A message was deleted and became a tombstone.
    MessageRetracted {
        room_id: RoomId,
        message_id: MessageId,
    },

    ReactionAdded {
        room_id: RoomId,
        message_id: MessageId,
        user_id: UserId,
        emoji: Emoji,
    },

    ReactionRemoved {
        room_id: RoomId,
        message_id: MessageId,
        user_id: UserId,
        emoji: Emoji,
    },

    /// A typing ping. Not persisted anywhere; it only refreshes the per-room compose state.
    ComposeStateChanged {
        room_id: RoomId,
        user_id: UserId,
        user_name: String,
        state: ComposeState,
    },
}

impl RemoteEvent {
    pub fn room_id(&self) -> &RoomId {
        match self {
            RemoteEvent::MessageAppended { message } | RemoteEvent::MessageUpdated { message } => {
                &message.room_id
            }
            RemoteEvent::MessageRetracted { room_id, .. }
            | RemoteEvent::ReactionAdded { room_id, .. }
            | RemoteEvent::ReactionRemoved { room_id, .. }
            | RemoteEvent::ComposeStateChanged { room_id, .. } => room_id,
        }
    }
}

/// Where a gateway subscription delivers its events. The client hands one sink to each
/// subscription it opens; the sink forwards into the serialized reconciliation loop.
pub type RemoteEventSink = Arc<dyn Fn(RemoteEvent) + Send + Sync>;
