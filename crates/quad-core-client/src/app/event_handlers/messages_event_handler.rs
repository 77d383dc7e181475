// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::{info, warn};

use crate::app::deps::{
    AppDependencies, DynAppContext, DynClientEventDispatcher, DynConnectedRoomsRepository,
    DynMessagesRepository, DynMessagingService, DynTimeProvider,
};
use crate::app::dtos::MessageNotification;
use crate::app::event_handlers::RemoteEventHandler;
use crate::client_event::RoomEventType;
use crate::domain::messaging::models::{AttachmentKind, Emoji, Message, RemoteEvent};
use crate::domain::shared::models::{MessageId, RoomId, UserId};
use crate::util::StringExt;
use crate::ClientEvent;

/// Applies message-level remote events to the loaded window and the room list.
pub struct MessagesEventHandler {
    ctx: DynAppContext,
    connected_rooms_repo: DynConnectedRoomsRepository,
    messages_repo: DynMessagesRepository,
    messaging_service: DynMessagingService,
    time_provider: DynTimeProvider,
    client_event_dispatcher: DynClientEventDispatcher,
}

impl From<&AppDependencies> for MessagesEventHandler {
    fn from(deps: &AppDependencies) -> Self {
        MessagesEventHandler {
            ctx: deps.ctx.clone(),
            connected_rooms_repo: deps.connected_rooms_repo.clone(),
            messages_repo: deps.messages_repo.clone(),
            messaging_service: deps.messaging_service.clone(),
            time_provider: deps.time_provider.clone(),
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
        }
    }
}

#[async_trait]
impl RemoteEventHandler for MessagesEventHandler {
    fn name(&self) -> &'static str {
        "messages"
    }

    async fn handle_event(&self, event: RemoteEvent) -> Result<Option<RemoteEvent>> {
        match event {
            RemoteEvent::MessageAppended { message } => {
                self.handle_appended_message(message).await?
            }
            RemoteEvent::MessageUpdated { message } => self.handle_updated_message(message)?,
            RemoteEvent::MessageRetracted {
                room_id,
                message_id,
            } => self.handle_retracted_message(room_id, message_id)?,
            RemoteEvent::ReactionAdded {
                room_id,
                message_id,
                user_id,
                emoji,
            } => self.handle_reaction(room_id, message_id, user_id, emoji, true)?,
            RemoteEvent::ReactionRemoved {
                room_id,
                message_id,
                user_id,
                emoji,
            } => self.handle_reaction(room_id, message_id, user_id, emoji, false)?,
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl MessagesEventHandler {
    async fn handle_appended_message(&self, message: Message) -> Result<()> {
        let room_id = message.room_id.clone();
        let Some(room) = self.connected_rooms_repo.get(&room_id) else {
            warn!(room = %room_id, "Received message for unknown room. Dropping it.");
            return Ok(());
        };

        // A repeated delivery must not bump the unread counter or notify again.
        if self.messages_repo.contains(&room_id, &message.id) {
            let message_id = message.id.clone();
            self.messages_repo.upsert(&room_id, message);
            self.client_event_dispatcher.dispatch_room_event(
                room_id,
                RoomEventType::MessagesUpdated {
                    message_ids: vec![message_id],
                },
            );
            return Ok(());
        }

        let is_own_message = message.from.id == self.ctx.user.id;
        let message_id = message.id.clone();
        let created_at = message.created_at;

        let replaced_pending = match &message.local_id {
            Some(local_id) => self
                .messages_repo
                .replace_local(&room_id, local_id, message.clone()),
            None => false,
        };
        if !replaced_pending {
            self.messages_repo.append(&room_id, message.clone());
        }

        room.touch(created_at);

        if self.ctx.is_selected_room(&room_id) {
            // The room is on screen, so the message counts as seen right away.
            if let Err(error) = self.messaging_service.mark_read(&room_id).await {
                warn!(room = %room_id, %error, "Failed to send read receipt.");
            }
            room.mark_read(&self.ctx.user.id, self.time_provider.now());
        } else if !is_own_message {
            room.increment_unread_count();
            self.client_event_dispatcher
                .dispatch_event(ClientEvent::MessageNotification {
                    notification: MessageNotification {
                        room_id: room_id.clone(),
                        room_name: room.display_name(&self.ctx.user.id),
                        sender_id: message.from.id.clone(),
                        sender_name: message.from.name.clone(),
                        body_preview: self.body_preview(&message),
                        timestamp: message.created_at,
                    },
                });
        }

        let event = if replaced_pending {
            RoomEventType::MessagesUpdated {
                message_ids: vec![message_id],
            }
        } else {
            RoomEventType::MessagesAppended {
                message_ids: vec![message_id],
            }
        };
        self.client_event_dispatcher
            .dispatch_room_event(room_id, event);
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::SidebarChanged);

        Ok(())
    }

    fn handle_updated_message(&self, message: Message) -> Result<()> {
        let room_id = message.room_id.clone();
        if !self.messages_repo.contains(&room_id, &message.id) {
            info!(
                room = %room_id,
                message = %message.id,
                "Ignoring update for message outside the loaded window."
            );
            return Ok(());
        }

        let message_id = message.id.clone();
        self.messages_repo.upsert(&room_id, message);
        self.client_event_dispatcher.dispatch_room_event(
            room_id,
            RoomEventType::MessagesUpdated {
                message_ids: vec![message_id],
            },
        );
        Ok(())
    }

    fn handle_retracted_message(&self, room_id: RoomId, message_id: MessageId) -> Result<()> {
        let updated =
            self.messages_repo
                .update(&room_id, &message_id, Box::new(Message::set_tombstone));

        if updated.is_none() {
            info!(
                room = %room_id,
                message = %message_id,
                "Ignoring retraction for message outside the loaded window."
            );
            return Ok(());
        }

        self.client_event_dispatcher.dispatch_room_event(
            room_id,
            RoomEventType::MessagesDeleted {
                message_ids: vec![message_id],
            },
        );
        Ok(())
    }

    fn handle_reaction(
        &self,
        room_id: RoomId,
        message_id: MessageId,
        user_id: UserId,
        emoji: Emoji,
        added: bool,
    ) -> Result<()> {
        let updated = self.messages_repo.update(
            &room_id,
            &message_id,
            Box::new(move |message| {
                if added {
                    message.apply_reaction_added(&user_id, &emoji)
                } else {
                    message.apply_reaction_removed(&user_id, &emoji)
                }
            }),
        );

        if updated.is_none() {
            info!(
                room = %room_id,
                message = %message_id,
                "Ignoring reaction for message outside the loaded window."
            );
            return Ok(());
        }

        self.client_event_dispatcher.dispatch_room_event(
            room_id,
            RoomEventType::MessagesUpdated {
                message_ids: vec![message_id],
            },
        );
        Ok(())
    }

    fn body_preview(&self, message: &Message) -> String {
        if let Some(body) = &message.body {
            return body.to_preview(self.ctx.config.notification_preview_length);
        }
        match message.attachments.first().map(|a| a.kind) {
            Some(AttachmentKind::Image) => "Sent a photo".to_string(),
            Some(AttachmentKind::Video) => "Sent a video".to_string(),
            Some(AttachmentKind::Audio) => "Sent a voice message".to_string(),
            Some(AttachmentKind::File) | None => "Sent a file".to_string(),
        }
    }
}
