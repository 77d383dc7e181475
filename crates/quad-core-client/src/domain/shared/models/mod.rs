// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use client_error::{ChatError, GatewayError};
pub use compose_state::ComposeState;
pub use id::{AttachmentId, MessageId, MessageLocalId, RoomId, SocietyId, UserId};
pub use local_user::LocalUser;

mod client_error;
mod compose_state;
mod id;
mod local_user;
