// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use message_stream_service::{MessageStreamService, Subscription};
pub use messaging_service::MessagingService;

#[cfg(any(test, feature = "test"))]
pub use message_stream_service::MockMessageStreamService;
#[cfg(any(test, feature = "test"))]
pub use messaging_service::MockMessagingService;

mod message_stream_service;
mod messaging_service;
