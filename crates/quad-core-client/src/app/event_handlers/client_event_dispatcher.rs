// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::{OnceLock, Weak};

use tracing::debug;

use crate::client::ClientInner;
use crate::client_event::{ClientEvent, RoomEventType};
use crate::domain::shared::models::RoomId;
use crate::{Client, ClientDelegate};

pub struct ClientEventDispatcher {
    client_inner: OnceLock<Weak<ClientInner>>,
    delegate: Option<Box<dyn ClientDelegate>>,
}

impl ClientEventDispatcher {
    pub(crate) fn new(delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        ClientEventDispatcher {
            client_inner: Default::default(),
            delegate,
        }
    }

    pub(crate) fn set_client_inner(&self, inner: Weak<ClientInner>) {
        if self.client_inner.set(inner).is_err() {
            debug!("Tried to set ClientInner more than once.");
        }
    }

    pub fn dispatch_event(&self, event: ClientEvent) {
        let Some(delegate) = &self.delegate else {
            return;
        };
        let Some(client) = self.client_inner.get().and_then(|inner| inner.upgrade()) else {
            debug!("Not dispatching event. ClientInner is not set or was dropped.");
            return;
        };
        delegate.handle_event(Client::from(client), event)
    }

    pub fn dispatch_room_event(&self, room_id: RoomId, event: RoomEventType) {
        self.dispatch_event(ClientEvent::RoomChanged {
            room_id,
            r#type: event,
        })
    }
}
