// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use room_management_service::{CreateRoomRequest, RoomManagementService};

#[cfg(any(test, feature = "test"))]
pub use room_management_service::MockRoomManagementService;

mod room_management_service;
