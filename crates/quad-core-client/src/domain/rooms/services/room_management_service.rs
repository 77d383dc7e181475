// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::rooms::models::Room;
use crate::domain::shared::models::{GatewayError, SocietyId, UserId};

#[derive(Debug, Clone, PartialEq)]
pub enum CreateRoomRequest {
    /// The pair is the current user plus `participant`. The gateway must return the existing
    /// room when one already exists for that pair instead of creating a duplicate; a backend
    /// `Conflict` is resolved inside the implementation, not surfaced.
    DirectMessage { participant: UserId },
    Group {
        name: String,
        participants: Vec<UserId>,
    },
    SocietyLinked {
        society_id: SocietyId,
        name: String,
        participants: Vec<UserId>,
    },
}

/// Room CRUD against the remote backend.
#[cfg_attr(any(test, feature = "test"), mockall::automock)]
#[async_trait]
pub trait RoomManagementService: Send + Sync {
    async fn load_rooms(&self, user_id: &UserId) -> Result<Vec<Room>, GatewayError>;

    async fn create_room(&self, request: CreateRoomRequest) -> Result<Room, GatewayError>;
}
