// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use message::{MessageDto, ReactionDto, ReplyPreview};
pub use message_notification::MessageNotification;
pub use room::RoomDto;
pub use snapshot::ChatStateSnapshot;

pub use crate::domain::messaging::models::{
    Attachment, AttachmentKind, Emoji, Message, MessageFlags, MessageSender, Reaction,
    RemoteEvent, RemoteEventSink, SendMessageRequest,
};
pub use crate::domain::rooms::models::{ComposingUser, Member, MemberRole, RoomKind};
pub use crate::domain::shared::models::{
    AttachmentId, ChatError, ComposeState, GatewayError, LocalUser, MessageId, MessageLocalId,
    RoomId, SocietyId, UserId,
};
pub use crate::domain::uploads::models::UploadRequest;

mod message;
mod message_notification;
mod room;
mod snapshot;
