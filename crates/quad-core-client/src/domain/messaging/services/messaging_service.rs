// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::messaging::models::{Emoji, Message, SendMessageRequest};
use crate::domain::shared::models::{GatewayError, MessageId, RoomId};

/// The request/response half of the gateway boundary for messages. Implementations talk to the
/// remote backend; no operation is retried in here, transient failures surface to the caller.
#[cfg_attr(any(test, feature = "test"), mockall::automock)]
#[async_trait]
pub trait MessagingService: Send + Sync {
    /// Loads a page of messages, newest first as stored by the backend. Callers reverse the
    /// page into display order.
    async fn load_messages(
        &self,
        room_id: &RoomId,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Message>, GatewayError>;

    /// Creates the message record and returns the authoritative message. The returned message
    /// carries the request's `local_id`.
    async fn send_message(
        &self,
        room_id: &RoomId,
        request: SendMessageRequest,
    ) -> Result<Message, GatewayError>;

    async fn update_message(
        &self,
        room_id: &RoomId,
        message_id: &MessageId,
        body: String,
    ) -> Result<(), GatewayError>;

    /// Tombstones the message. The record is kept, its content is cleared server-side.
    async fn retract_message(
        &self,
        room_id: &RoomId,
        message_id: &MessageId,
    ) -> Result<(), GatewayError>;

    /// Idempotent per (message, user, emoji).
    async fn add_reaction(
        &self,
        room_id: &RoomId,
        message_id: &MessageId,
        emoji: &Emoji,
    ) -> Result<(), GatewayError>;

    /// Idempotent per (message, user, emoji).
    async fn remove_reaction(
        &self,
        room_id: &RoomId,
        message_id: &MessageId,
        emoji: &Emoji,
    ) -> Result<(), GatewayError>;

    /// Updates the calling user's `last_read_at` for this room only.
    async fn mark_read(&self, room_id: &RoomId) -> Result<(), GatewayError>;

    /// Broadcasts a typing ping (or its end) to the other members. Best effort.
    async fn set_user_is_composing(
        &self,
        room_id: &RoomId,
        is_composing: bool,
    ) -> Result<(), GatewayError>;

    /// Full-text search, newest first. Scoped to a room when `room_id` is given.
    async fn search(
        &self,
        query: &str,
        room_id: Option<RoomId>,
    ) -> Result<Vec<Message>, GatewayError>;
}
