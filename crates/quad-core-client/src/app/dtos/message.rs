// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::messaging::models::{Attachment, Emoji, Message, MessageFlags, MessageSender};
use crate::domain::shared::models::{MessageId, RoomId, UserId};

/// A message shaped for display, with reactions aggregated from the viewer's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDto {
    pub id: MessageId,
    pub room_id: RoomId,
    pub from: MessageSender,
    pub body: Option<String>,
    pub attachments: Vec<Attachment>,
    pub reactions: Vec<ReactionDto>,
    pub reply_to: Option<ReplyPreview>,
    pub created_at: DateTime<Utc>,
    pub edited_at: Option<DateTime<Utc>>,
    pub flags: MessageFlags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionDto {
    pub emoji: Emoji,
    pub count: usize,
    pub from: Vec<UserId>,
    /// Whether the viewing user is among the reactors.
    pub did_react: bool,
}

/// The quoted excerpt rendered above a reply. `sender_name` and `body` are only available
/// when the quoted message is inside the loaded window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyPreview {
    pub id: MessageId,
    pub sender_name: Option<String>,
    pub body: Option<String>,
}

impl MessageDto {
    pub fn for_message(
        message: Message,
        current_user: &UserId,
        resolve_reply: impl Fn(&MessageId) -> Option<(String, Option<String>)>,
    ) -> Self {
        let reply_to = message.reply_to.map(|id| {
            let resolved = resolve_reply(&id);
            let (sender_name, body) = match resolved {
                Some((sender_name, body)) => (Some(sender_name), body),
                None => (None, None),
            };
            ReplyPreview {
                id,
                sender_name,
                body,
            }
        });

        MessageDto {
            id: message.id,
            room_id: message.room_id,
            from: message.from,
            body: message.body,
            attachments: message.attachments,
            reactions: message
                .reactions
                .into_iter()
                .map(|reaction| ReactionDto {
                    count: reaction.from.len(),
                    did_react: reaction.from.contains(current_user),
                    emoji: reaction.emoji,
                    from: reaction.from,
                })
                .collect(),
            reply_to,
            created_at: message.created_at,
            edited_at: message.edited_at,
            flags: message.flags,
        }
    }
}
