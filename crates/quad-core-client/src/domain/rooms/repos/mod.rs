// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use connected_rooms_repository::{ConnectedRoomsRepository, RoomAlreadyExistsError};
#[cfg(any(test, feature = "test"))]
pub use connected_rooms_repository::MockConnectedRoomsRepository;

mod connected_rooms_repository;
