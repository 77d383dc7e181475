// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use composing_user::ComposingUser;
pub use member::{Member, MemberRole};
pub use room::{Occupant, Room, RoomInfo, RoomKind, RoomState};

mod composing_user;
mod member;
mod room;
