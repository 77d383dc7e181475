// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

use crate::domain::shared::models::{RoomId, UserId};

/// Raised for an inbound message in a room the user does not have open.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageNotification {
    pub room_id: RoomId,
    pub room_name: String,
    pub sender_id: UserId,
    pub sender_name: String,
    /// Truncated body, or an attachment placeholder when the message has no text.
    pub body_preview: String,
    pub timestamp: DateTime<Utc>,
}
