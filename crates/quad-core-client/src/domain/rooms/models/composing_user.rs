// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::UserId;

/// A user who is currently typing in a room.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposingUser {
    pub id: UserId,
    pub name: String,
}
