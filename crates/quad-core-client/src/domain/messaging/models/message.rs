// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use quad_utils::id_string;

use crate::domain::messaging::models::Attachment;
use crate::domain::shared::models::{MessageId, MessageLocalId, RoomId, UserId};

id_string!(Emoji);

/// The aggregated reactions of one emoji on one message. The count is the length of `from`;
/// a user appears at most once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    pub emoji: Emoji,
    pub from: Vec<UserId>,
}

/// The author of a message, denormalized at send time. Profile changes after sending do not
/// rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageSender {
    pub id: UserId,
    pub name: String,
    pub avatar: Option<Url>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MessageFlags {
    /// Set on optimistic entries that have not been confirmed by the gateway yet.
    pub is_pending: bool,
    pub is_edited: bool,
    /// Tombstone. The message stays in the store with cleared content; the UI filters it.
    pub is_deleted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    /// Client-generated correlation id, echoed back by the gateway for messages we sent.
    pub local_id: Option<MessageLocalId>,
    pub room_id: RoomId,
    pub from: MessageSender,
    pub body: Option<String>,
    pub attachments: Vec<Attachment>,
    pub reactions: Vec<Reaction>,
    /// Soft reference. The target message is not guaranteed to be in the loaded window.
    pub reply_to: Option<MessageId>,
    pub created_at: DateTime<Utc>,
    pub edited_at: Option<DateTime<Utc>>,
    pub flags: MessageFlags,
}

impl Message {
    /// A message needs either a body or at least one attachment.
    pub fn has_content(&self) -> bool {
        self.body.as_deref().is_some_and(|body| !body.trim().is_empty())
            || !self.attachments.is_empty()
    }

    pub fn toggle_reaction(&mut self, user_id: &UserId, emoji: Emoji) {
        let Some(reaction) = self
            .reactions
            .iter_mut()
            .find(|reaction| reaction.emoji == emoji)
        else {
            self.reactions.push(Reaction {
                emoji,
                from: vec![user_id.clone()],
            });
            return;
        };

        if let Some(idx) = reaction.from.iter().position(|id| id == user_id) {
            reaction.from.remove(idx);
        } else {
            reaction.from.push(user_id.clone())
        }

        self.reactions.retain(|reaction| !reaction.from.is_empty());
    }

    /// Applies an inbound "reaction added" event. Idempotent: if the user is already in the
    /// reacting set (e.g. because we applied the same change optimistically) nothing happens.
    pub fn apply_reaction_added(&mut self, user_id: &UserId, emoji: &Emoji) {
        let Some(reaction) = self
            .reactions
            .iter_mut()
            .find(|reaction| &reaction.emoji == emoji)
        else {
            self.reactions.push(Reaction {
                emoji: emoji.clone(),
                from: vec![user_id.clone()],
            });
            return;
        };

        if !reaction.from.contains(user_id) {
            reaction.from.push(user_id.clone())
        }
    }

    /// Applies an inbound "reaction removed" event. Idempotent; the count can never go below
    /// zero since removal is set-removal, not a decrement.
    pub fn apply_reaction_removed(&mut self, user_id: &UserId, emoji: &Emoji) {
        for reaction in &mut self.reactions {
            if &reaction.emoji == emoji {
                reaction.from.retain(|id| id != user_id);
            }
        }
        self.reactions.retain(|reaction| !reaction.from.is_empty());
    }

    pub fn reactions_from<'a, 'b: 'a>(
        &'a self,
        user_id: &'b UserId,
    ) -> impl Iterator<Item = &'a Emoji> {
        self.reactions
            .iter()
            .filter(|reaction| reaction.from.contains(user_id))
            .map(|reaction| &reaction.emoji)
    }

    pub fn has_reaction_from(&self, user_id: &UserId, emoji: &Emoji) -> bool {
        self.reactions
            .iter()
            .any(|reaction| &reaction.emoji == emoji && reaction.from.contains(user_id))
    }

    /// Turns the message into a tombstone. Body and attachments are cleared, not retained.
    pub fn set_tombstone(&mut self) {
        self.flags.is_deleted = true;
        self.body = None;
        self.attachments.clear();
        self.reactions.clear();
    }
}
