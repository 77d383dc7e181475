// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::app::deps::{
    AppDependencies, DynAppContext, DynClientEventDispatcher, DynConnectedRoomsRepository,
    DynRoomManagementService,
};
use crate::domain::rooms::services::CreateRoomRequest;
use crate::domain::shared::models::{ChatError, RoomId, SocietyId, UserId};
use crate::ClientEvent;

/// Manages the set of connected rooms.
pub struct RoomsService {
    ctx: DynAppContext,
    client_event_dispatcher: DynClientEventDispatcher,
    connected_rooms_repo: DynConnectedRoomsRepository,
    room_management_service: DynRoomManagementService,
}

impl From<&AppDependencies> for RoomsService {
    fn from(deps: &AppDependencies) -> Self {
        RoomsService {
            ctx: deps.ctx.clone(),
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
            connected_rooms_repo: deps.connected_rooms_repo.clone(),
            room_management_service: deps.room_management_service.clone(),
        }
    }
}

impl RoomsService {
    /// Replaces the connected-room set with the rooms the current user is a member of.
    pub async fn load_rooms(&self) -> Result<(), ChatError> {
        let rooms = self
            .room_management_service
            .load_rooms(&self.ctx.user.id)
            .await
            .map_err(ChatError::LoadRoomsFailed)?;

        self.connected_rooms_repo.delete_all();
        for room in rooms {
            // Duplicate ids from the gateway are skipped, first one wins.
            _ = self.connected_rooms_repo.set(room);
        }

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::SidebarChanged);
        Ok(())
    }

    /// Opens (or returns) the 1:1 room between the current user and `participant`. The
    /// gateway guarantees at most one such room exists per pair, so calling this twice
    /// yields the same room id.
    pub async fn start_direct_message(&self, participant: &UserId) -> Result<RoomId, ChatError> {
        if participant == &self.ctx.user.id {
            return Err(ChatError::Validation(
                "cannot start a direct message with yourself".to_string(),
            ));
        }
        self.create_room(CreateRoomRequest::DirectMessage {
            participant: participant.clone(),
        })
        .await
    }

    pub async fn create_group(
        &self,
        name: &str,
        participants: Vec<UserId>,
    ) -> Result<RoomId, ChatError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ChatError::Validation("a group needs a name".to_string()));
        }
        if participants.is_empty() {
            return Err(ChatError::Validation(
                "a group needs at least one other participant".to_string(),
            ));
        }
        self.create_room(CreateRoomRequest::Group {
            name: name.to_string(),
            participants,
        })
        .await
    }

    /// Creates a room tied to a society. Membership is managed by the society roster on the
    /// backend; `participants` is the initial set.
    pub async fn create_society_room(
        &self,
        society_id: &SocietyId,
        name: &str,
        participants: Vec<UserId>,
    ) -> Result<RoomId, ChatError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ChatError::Validation(
                "a society room needs a name".to_string(),
            ));
        }
        self.create_room(CreateRoomRequest::SocietyLinked {
            society_id: society_id.clone(),
            name: name.to_string(),
            participants,
        })
        .await
    }

    async fn create_room(&self, request: CreateRoomRequest) -> Result<RoomId, ChatError> {
        let room = self
            .room_management_service
            .create_room(request)
            .await
            .map_err(ChatError::CreateRoomFailed)?;

        let room_id = room.id().clone();
        // When the gateway hands back a room we already track, the tracked one wins so that
        // local state like unread counts survives.
        _ = self.connected_rooms_repo.set(room);
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::SidebarChanged);
        Ok(room_id)
    }
}
