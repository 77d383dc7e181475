// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};

use async_trait::async_trait;

use crate::domain::messaging::models::RemoteEventSink;
use crate::domain::shared::models::{GatewayError, RoomId};

/// A live gateway subscription. Each active subscription holds a backend connection slot, so
/// cancellation is explicit and also runs on drop; a handle must never outlive the room
/// selection it was created for.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Subscription {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel()
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel()
        }
    }
}

impl Debug for Subscription {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

/// The push half of the gateway boundary. One message stream and one update stream (reactions,
/// edits, retractions) per room.
#[cfg_attr(any(test, feature = "test"), mockall::automock)]
#[async_trait]
pub trait MessageStreamService: Send + Sync {
    /// Subscribes to new messages in `room_id`. Events arrive on `sink` in arrival order.
    async fn subscribe_to_messages(
        &self,
        room_id: &RoomId,
        sink: RemoteEventSink,
    ) -> Result<Subscription, GatewayError>;

    /// Subscribes to reactions, edits and retractions in `room_id`.
    async fn subscribe_to_message_updates(
        &self,
        room_id: &RoomId,
        sink: RemoteEventSink,
    ) -> Result<Subscription, GatewayError>;
}
