// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use chat_service::ChatService;
pub use rooms_service::RoomsService;

mod chat_service;
mod rooms_service;
