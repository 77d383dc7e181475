// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use in_memory_connected_rooms_repository::InMemoryConnectedRoomsRepository;

mod in_memory_connected_rooms_repository;
