// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use messages_repository::{MessageUpdateHandler, MessagesRepository};
#[cfg(any(test, feature = "test"))]
pub use messages_repository::MockMessagesRepository;

mod messages_repository;
