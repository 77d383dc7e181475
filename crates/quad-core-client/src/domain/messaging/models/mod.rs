// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use attachment::{Attachment, AttachmentKind};
pub use message::{Emoji, Message, MessageFlags, MessageSender, Reaction};
pub use remote_event::{RemoteEvent, RemoteEventSink};
pub use send_message_request::SendMessageRequest;

mod attachment;
mod message;
mod remote_event;
mod send_message_request;
