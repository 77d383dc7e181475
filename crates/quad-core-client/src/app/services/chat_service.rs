// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, warn};

use crate::app::deps::{
    AppDependencies, DynAppContext, DynClientEventDispatcher, DynConnectedRoomsRepository,
    DynIDProvider, DynMessageStreamService, DynMessagesRepository, DynMessagingService,
    DynTimeProvider, DynUploadService,
};
use crate::app::dtos::{ChatStateSnapshot, MessageDto, RoomDto};
use crate::client_event::RoomEventType;
use crate::domain::messaging::models::{
    Emoji, Message, MessageFlags, MessageSender, RemoteEventSink, SendMessageRequest,
};
use crate::domain::messaging::services::Subscription;
use crate::domain::rooms::models::Room;
use crate::domain::shared::models::{
    ChatError, GatewayError, MessageId, MessageLocalId, RoomId,
};
use crate::domain::uploads::models::UploadRequest;
use crate::ClientEvent;

/// Everything tied to the lifetime of one room selection. Dropped as a whole when the
/// selection changes, which cancels the contained subscriptions.
struct RoomSession {
    room_id: RoomId,
    subscriptions: Vec<Subscription>,
}

/// The optimistic sync engine. Every mutation follows the same shape: apply the expected
/// outcome to the local store, call the gateway, and either reconcile the confirmation or
/// roll the local change back and record the failure in `last_error`.
pub struct ChatService {
    ctx: DynAppContext,
    client_event_dispatcher: DynClientEventDispatcher,
    connected_rooms_repo: DynConnectedRoomsRepository,
    messages_repo: DynMessagesRepository,
    messaging_service: DynMessagingService,
    message_stream_service: DynMessageStreamService,
    upload_service: DynUploadService,
    time_provider: DynTimeProvider,
    short_id_provider: DynIDProvider,
    event_sink: RemoteEventSink,
    session: Mutex<Option<RoomSession>>,
    /// Bumped on every typing ping and on room teardown. An auto-stop timer only fires when
    /// the generation it captured is still current.
    typing_generation: Arc<AtomicU64>,
    search_results: RwLock<Vec<Message>>,
    last_error: RwLock<Option<ChatError>>,
    is_loading: AtomicBool,
}

impl ChatService {
    pub(crate) fn new(deps: &AppDependencies, event_sink: RemoteEventSink) -> Self {
        ChatService {
            ctx: deps.ctx.clone(),
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
            connected_rooms_repo: deps.connected_rooms_repo.clone(),
            messages_repo: deps.messages_repo.clone(),
            messaging_service: deps.messaging_service.clone(),
            message_stream_service: deps.message_stream_service.clone(),
            upload_service: deps.upload_service.clone(),
            time_provider: deps.time_provider.clone(),
            short_id_provider: deps.short_id_provider.clone(),
            event_sink,
            session: Mutex::new(None),
            typing_generation: Arc::new(AtomicU64::new(0)),
            search_results: Default::default(),
            last_error: Default::default(),
            is_loading: AtomicBool::new(false),
        }
    }

    /// Makes `room_id` the current room: tears down the previous selection, opens the message
    /// and update subscriptions, loads the latest page and marks the room read. Passing `None`
    /// just clears the selection.
    pub async fn select_room(&self, room_id: Option<RoomId>) -> Result<(), ChatError> {
        self.teardown_session();

        let Some(room_id) = room_id else {
            return Ok(());
        };

        let room = self
            .connected_rooms_repo
            .get(&room_id)
            .ok_or_else(|| ChatError::RoomNotFound(room_id.clone()))?;

        self.is_loading.store(true, Ordering::SeqCst);
        let result = self.setup_session(&room_id, &room).await;
        self.is_loading.store(false, Ordering::SeqCst);

        if let Err(error) = &result {
            let _ = self.record_error(error.clone());
            self.teardown_session();
        }
        result
    }

    /// Sends a message to the current room. Uploads are pushed first; a file that fails to
    /// upload is skipped with a warning rather than failing the whole send. The message shows
    /// up as pending immediately and is reconciled (or rolled back) once the gateway answers.
    pub async fn send_message(
        &self,
        body: Option<String>,
        uploads: Vec<UploadRequest>,
        reply_to: Option<MessageId>,
    ) -> Result<(), ChatError> {
        let room_id = self.ctx.selected_room().ok_or(ChatError::NoRoomSelected)?;

        let body = body
            .map(|body| body.trim().to_string())
            .filter(|body| !body.is_empty());

        if body.is_none() && uploads.is_empty() {
            return Err(self.record_error(ChatError::Validation(
                "a message needs a body or at least one attachment".to_string(),
            )));
        }

        let mut attachments = Vec::with_capacity(uploads.len());
        for upload in uploads {
            let file_name = upload.file_name.clone();
            match self.upload_service.upload(upload).await {
                Ok(attachment) => attachments.push(attachment),
                Err(GatewayError::NotAuthenticated) => {
                    return Err(
                        self.record_error(ChatError::SendFailed(GatewayError::NotAuthenticated))
                    );
                }
                Err(error) => {
                    warn!(file_name, %error, "Skipping attachment that failed to upload.")
                }
            }
        }

        if body.is_none() && attachments.is_empty() {
            return Err(self.record_error(ChatError::Validation(
                "none of the attachments could be uploaded".to_string(),
            )));
        }

        let local_id = MessageLocalId::from(self.short_id_provider.new_id());
        let provisional_id = MessageId::from(local_id.as_ref());

        let message = Message {
            id: provisional_id.clone(),
            local_id: Some(local_id.clone()),
            room_id: room_id.clone(),
            from: MessageSender {
                id: self.ctx.user.id.clone(),
                name: self.ctx.user.name.clone(),
                avatar: self.ctx.user.avatar.clone(),
            },
            body: body.clone(),
            attachments: attachments.clone(),
            reactions: vec![],
            reply_to: reply_to.clone(),
            created_at: self.time_provider.now(),
            edited_at: None,
            flags: MessageFlags {
                is_pending: true,
                ..Default::default()
            },
        };

        self.messages_repo.append(&room_id, message);
        self.dispatch_messages_event(
            &room_id,
            RoomEventType::MessagesAppended {
                message_ids: vec![provisional_id.clone()],
            },
        );

        let request = SendMessageRequest {
            local_id: local_id.clone(),
            body,
            attachments,
            reply_to,
        };

        match self.messaging_service.send_message(&room_id, request).await {
            Ok(confirmed) => {
                let confirmed_id = confirmed.id.clone();
                let created_at = confirmed.created_at;
                self.messages_repo
                    .replace_local(&room_id, &local_id, confirmed);
                if let Some(room) = self.connected_rooms_repo.get(&room_id) {
                    room.touch(created_at);
                }
                self.dispatch_messages_event(
                    &room_id,
                    RoomEventType::MessagesUpdated {
                        message_ids: vec![confirmed_id],
                    },
                );
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::SidebarChanged);
                Ok(())
            }
            Err(error) => {
                self.messages_repo.remove_local(&room_id, &local_id);
                self.dispatch_messages_event(
                    &room_id,
                    RoomEventType::MessagesDeleted {
                        message_ids: vec![provisional_id],
                    },
                );
                Err(self.record_error(ChatError::SendFailed(error)))
            }
        }
    }

    /// Edits one of the current user's messages. The edit is visible immediately and reverted
    /// to the prior content when the gateway rejects it.
    pub async fn update_message(
        &self,
        message_id: MessageId,
        body: String,
    ) -> Result<(), ChatError> {
        let room_id = self.ctx.selected_room().ok_or(ChatError::NoRoomSelected)?;

        let body = body.trim().to_string();
        if body.is_empty() {
            return Err(self.record_error(ChatError::Validation(
                "an edited message cannot be empty".to_string(),
            )));
        }

        let prior = self
            .messages_repo
            .get(&room_id, &message_id)
            .ok_or_else(|| ChatError::MessageNotFound(message_id.clone()))?;

        if prior.from.id != self.ctx.user.id {
            return Err(self.record_error(ChatError::Validation(
                "only your own messages can be edited".to_string(),
            )));
        }
        if prior.flags.is_deleted {
            return Err(self.record_error(ChatError::Validation(
                "a deleted message cannot be edited".to_string(),
            )));
        }

        let edited_at = self.time_provider.now();
        {
            let body = body.clone();
            self.messages_repo.update(
                &room_id,
                &message_id,
                Box::new(move |message| {
                    message.body = Some(body);
                    message.edited_at = Some(edited_at);
                    message.flags.is_edited = true;
                }),
            );
        }
        self.dispatch_messages_event(
            &room_id,
            RoomEventType::MessagesUpdated {
                message_ids: vec![message_id.clone()],
            },
        );

        match self
            .messaging_service
            .update_message(&room_id, &message_id, body)
            .await
        {
            Ok(()) => Ok(()),
            Err(error) => {
                self.messages_repo.upsert(&room_id, prior);
                self.dispatch_messages_event(
                    &room_id,
                    RoomEventType::MessagesUpdated {
                        message_ids: vec![message_id],
                    },
                );
                Err(self.record_error(ChatError::EditFailed(error)))
            }
        }
    }

    /// Deletes one of the current user's messages. Locally the message turns into a tombstone
    /// right away; the prior content comes back when the gateway rejects the retraction.
    pub async fn retract_message(&self, message_id: MessageId) -> Result<(), ChatError> {
        let room_id = self.ctx.selected_room().ok_or(ChatError::NoRoomSelected)?;

        let prior = self
            .messages_repo
            .get(&room_id, &message_id)
            .ok_or_else(|| ChatError::MessageNotFound(message_id.clone()))?;

        if prior.from.id != self.ctx.user.id {
            return Err(self.record_error(ChatError::Validation(
                "only your own messages can be deleted".to_string(),
            )));
        }
        if prior.flags.is_deleted {
            return Ok(());
        }

        self.messages_repo
            .update(&room_id, &message_id, Box::new(Message::set_tombstone));
        self.dispatch_messages_event(
            &room_id,
            RoomEventType::MessagesDeleted {
                message_ids: vec![message_id.clone()],
            },
        );

        match self
            .messaging_service
            .retract_message(&room_id, &message_id)
            .await
        {
            Ok(()) => Ok(()),
            Err(error) => {
                self.messages_repo.upsert(&room_id, prior);
                self.dispatch_messages_event(
                    &room_id,
                    RoomEventType::MessagesUpdated {
                        message_ids: vec![message_id],
                    },
                );
                Err(self.record_error(ChatError::DeleteFailed(error)))
            }
        }
    }

    /// Adds the current user's reaction when absent, removes it when present. Applied
    /// optimistically and inverted on gateway failure.
    pub async fn toggle_reaction(
        &self,
        message_id: MessageId,
        emoji: Emoji,
    ) -> Result<(), ChatError> {
        let (room_id, message) = self.reaction_target(&message_id)?;
        let is_adding = !message.has_reaction_from(&self.ctx.user.id, &emoji);
        self.mutate_reaction(&room_id, &message_id, &emoji, is_adding)
            .await
    }

    /// Adds the current user's reaction. A no-op when it is already present, so a caller
    /// acting on a stale view cannot accidentally remove it.
    pub async fn add_reaction(
        &self,
        message_id: MessageId,
        emoji: Emoji,
    ) -> Result<(), ChatError> {
        let (room_id, message) = self.reaction_target(&message_id)?;
        if message.has_reaction_from(&self.ctx.user.id, &emoji) {
            return Ok(());
        }
        self.mutate_reaction(&room_id, &message_id, &emoji, true)
            .await
    }

    /// Removes the current user's reaction. A no-op when it is not present.
    pub async fn remove_reaction(
        &self,
        message_id: MessageId,
        emoji: Emoji,
    ) -> Result<(), ChatError> {
        let (room_id, message) = self.reaction_target(&message_id)?;
        if !message.has_reaction_from(&self.ctx.user.id, &emoji) {
            return Ok(());
        }
        self.mutate_reaction(&room_id, &message_id, &emoji, false)
            .await
    }

    /// Sends a typing ping for the current room. A `true` ping arms (or re-arms) an auto-stop
    /// timer that sends the matching `false` when the user goes quiet. Failures are swallowed;
    /// typing is best effort.
    pub async fn set_user_is_composing(&self, is_composing: bool) {
        let Some(room_id) = self.ctx.selected_room() else {
            return;
        };

        let generation = self.typing_generation.fetch_add(1, Ordering::SeqCst) + 1;

        if let Err(error) = self
            .messaging_service
            .set_user_is_composing(&room_id, is_composing)
            .await
        {
            debug!(room = %room_id, %error, "Failed to send typing ping.");
        }

        if !is_composing {
            return;
        }

        let messaging_service = self.messaging_service.clone();
        let typing_generation = self.typing_generation.clone();
        let timeout = self.ctx.config.typing_timeout;

        tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            if typing_generation.load(Ordering::SeqCst) != generation {
                // A newer ping or a room switch superseded this timer.
                return;
            }
            if let Err(error) = messaging_service
                .set_user_is_composing(&room_id, false)
                .await
            {
                debug!(room = %room_id, %error, "Failed to send typing stop.");
            }
        });
    }

    /// Marks the current room as read, on the gateway and locally.
    pub async fn mark_as_read(&self) -> Result<(), ChatError> {
        let Some(room_id) = self.ctx.selected_room() else {
            return Ok(());
        };

        self.messaging_service
            .mark_read(&room_id)
            .await
            .map_err(|error| self.record_error(ChatError::MarkReadFailed(error)))?;

        if let Some(room) = self.connected_rooms_repo.get(&room_id) {
            room.mark_read(&self.ctx.user.id, self.time_provider.now());
        }
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::SidebarChanged);
        Ok(())
    }

    /// Full-text search across all rooms, or within `room_id` when given. An empty query
    /// clears the stored results.
    pub async fn search(
        &self,
        query: &str,
        room_id: Option<RoomId>,
    ) -> Result<Vec<MessageDto>, ChatError> {
        let query = query.trim();
        if query.is_empty() {
            self.search_results.write().clear();
            return Ok(vec![]);
        }

        let results = self
            .messaging_service
            .search(query, room_id)
            .await
            .map_err(|error| self.record_error(ChatError::SearchFailed(error)))?;

        *self.search_results.write() = results.clone();
        Ok(self.messages_to_dtos(results))
    }

    /// A self-consistent view of the current chat state.
    pub fn snapshot(&self) -> ChatStateSnapshot {
        let current_user = &self.ctx.user.id;
        let selected = self.ctx.selected_room();

        let rooms = self
            .connected_rooms_repo
            .get_all()
            .iter()
            .map(|room| RoomDto::for_room(room, current_user))
            .collect();

        let current_room = selected
            .as_ref()
            .and_then(|room_id| self.connected_rooms_repo.get(room_id));

        let (messages, typing_users) = match (&selected, &current_room) {
            (Some(room_id), Some(room)) => {
                let cutoff = self.time_provider.now() - self.ctx.typing_timeout();
                let typing_users = room
                    .composing_users(cutoff)
                    .into_iter()
                    .filter(|user| &user.id != current_user)
                    .collect();
                (self.messages_to_dtos(self.messages_repo.get_all(room_id)), typing_users)
            }
            _ => (vec![], vec![]),
        };

        ChatStateSnapshot {
            rooms,
            current_room: current_room
                .as_ref()
                .map(|room| RoomDto::for_room(room, current_user)),
            messages,
            typing_users,
            search_results: self.messages_to_dtos(self.search_results.read().clone()),
            is_loading: self.is_loading.load(Ordering::SeqCst),
            last_error: self.last_error.read().clone(),
        }
    }

    pub fn clear_last_error(&self) {
        *self.last_error.write() = None;
    }

    /// Tears down the current selection and its subscriptions.
    pub fn close(&self) {
        self.teardown_session();
    }
}

impl ChatService {
    async fn setup_session(&self, room_id: &RoomId, room: &Room) -> Result<(), ChatError> {
        let messages_subscription = self
            .message_stream_service
            .subscribe_to_messages(room_id, self.event_sink.clone())
            .await
            .map_err(ChatError::SubscribeFailed)?;
        let updates_subscription = self
            .message_stream_service
            .subscribe_to_message_updates(room_id, self.event_sink.clone())
            .await
            .map_err(ChatError::SubscribeFailed)?;

        *self.session.lock() = Some(RoomSession {
            room_id: room_id.clone(),
            subscriptions: vec![messages_subscription, updates_subscription],
        });
        self.ctx.set_selected_room(Some(room_id.clone()));

        let mut page = self
            .messaging_service
            .load_messages(room_id, self.ctx.config.message_page_size, 0)
            .await
            .map_err(ChatError::LoadMessagesFailed)?;
        page.reverse();
        let message_ids = page.iter().map(|message| message.id.clone()).collect();
        // Inbound messages may have landed in the window between opening the subscriptions
        // and the page response. Merge the page in rather than replacing the window.
        for message in page {
            self.messages_repo.upsert(room_id, message);
        }

        if let Err(error) = self.messaging_service.mark_read(room_id).await {
            warn!(room = %room_id, %error, "Failed to mark room as read.");
        } else {
            room.mark_read(&self.ctx.user.id, self.time_provider.now());
        }

        self.dispatch_messages_event(
            room_id,
            RoomEventType::MessagesAppended { message_ids },
        );
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::SidebarChanged);
        Ok(())
    }

    fn teardown_session(&self) {
        self.typing_generation.fetch_add(1, Ordering::SeqCst);

        let session = self.session.lock().take();
        if let Some(session) = session {
            debug!(room = %session.room_id, "Cancelling room subscriptions…");
            for subscription in session.subscriptions {
                subscription.cancel();
            }
            self.messages_repo.clear(&session.room_id);
        }
        self.ctx.set_selected_room(None);
    }

    fn reaction_target(&self, message_id: &MessageId) -> Result<(RoomId, Message), ChatError> {
        let room_id = self.ctx.selected_room().ok_or(ChatError::NoRoomSelected)?;

        let message = self
            .messages_repo
            .get(&room_id, message_id)
            .ok_or_else(|| ChatError::MessageNotFound(message_id.clone()))?;

        if message.flags.is_deleted {
            return Err(self.record_error(ChatError::Validation(
                "a deleted message cannot be reacted to".to_string(),
            )));
        }
        Ok((room_id, message))
    }

    async fn mutate_reaction(
        &self,
        room_id: &RoomId,
        message_id: &MessageId,
        emoji: &Emoji,
        is_adding: bool,
    ) -> Result<(), ChatError> {
        self.apply_reaction(room_id, message_id, emoji, is_adding);

        let result = if is_adding {
            self.messaging_service
                .add_reaction(room_id, message_id, emoji)
                .await
        } else {
            self.messaging_service
                .remove_reaction(room_id, message_id, emoji)
                .await
        };

        if let Err(error) = result {
            self.apply_reaction(room_id, message_id, emoji, !is_adding);
            return Err(self.record_error(ChatError::ReactionFailed(error)));
        }
        Ok(())
    }

    fn apply_reaction(&self, room_id: &RoomId, message_id: &MessageId, emoji: &Emoji, add: bool) {
        let user_id = self.ctx.user.id.clone();
        let emoji = emoji.clone();
        self.messages_repo.update(
            room_id,
            message_id,
            Box::new(move |message| {
                if add {
                    message.apply_reaction_added(&user_id, &emoji)
                } else {
                    message.apply_reaction_removed(&user_id, &emoji)
                }
            }),
        );
        self.dispatch_messages_event(
            room_id,
            RoomEventType::MessagesUpdated {
                message_ids: vec![message_id.clone()],
            },
        );
    }

    fn messages_to_dtos(&self, messages: Vec<Message>) -> Vec<MessageDto> {
        let lookup = messages
            .iter()
            .map(|message| {
                (
                    message.id.clone(),
                    (message.from.name.clone(), message.body.clone()),
                )
            })
            .collect::<HashMap<_, _>>();

        messages
            .into_iter()
            .map(|message| {
                MessageDto::for_message(message, &self.ctx.user.id, |id| lookup.get(id).cloned())
            })
            .collect()
    }

    fn dispatch_messages_event(&self, room_id: &RoomId, event: RoomEventType) {
        self.client_event_dispatcher
            .dispatch_room_event(room_id.clone(), event);
    }

    fn record_error(&self, error: ChatError) -> ChatError {
        *self.last_error.write() = Some(error.clone());
        error
    }
}
