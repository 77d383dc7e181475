// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::warn;

use crate::app::deps::{
    AppDependencies, DynAppContext, DynClientEventDispatcher, DynConnectedRoomsRepository,
    DynTimeProvider,
};
use crate::app::event_handlers::RemoteEventHandler;
use crate::client_event::RoomEventType;
use crate::domain::messaging::models::RemoteEvent;

/// Feeds typing pings into the per-room compose state.
pub struct ComposingEventHandler {
    ctx: DynAppContext,
    connected_rooms_repo: DynConnectedRoomsRepository,
    time_provider: DynTimeProvider,
    client_event_dispatcher: DynClientEventDispatcher,
}

impl From<&AppDependencies> for ComposingEventHandler {
    fn from(deps: &AppDependencies) -> Self {
        ComposingEventHandler {
            ctx: deps.ctx.clone(),
            connected_rooms_repo: deps.connected_rooms_repo.clone(),
            time_provider: deps.time_provider.clone(),
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
        }
    }
}

#[async_trait]
impl RemoteEventHandler for ComposingEventHandler {
    fn name(&self) -> &'static str {
        "composing"
    }

    async fn handle_event(&self, event: RemoteEvent) -> Result<Option<RemoteEvent>> {
        let RemoteEvent::ComposeStateChanged {
            room_id,
            user_id,
            user_name,
            state,
        } = event
        else {
            return Ok(Some(event));
        };

        let Some(room) = self.connected_rooms_repo.get(&room_id) else {
            warn!(room = %room_id, "Received typing ping for unknown room. Dropping it.");
            return Ok(None);
        };

        // The ping is stamped with our clock, not the sender's, so expiry does not depend on
        // clock skew between participants.
        room.set_compose_state(&user_id, &user_name, self.time_provider.now(), state);

        if self.ctx.is_selected_room(&room_id) {
            self.client_event_dispatcher
                .dispatch_room_event(room_id, RoomEventType::ComposingUsersChanged);
        }

        Ok(None)
    }
}
