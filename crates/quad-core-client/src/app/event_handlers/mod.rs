// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use client_event_dispatcher::ClientEventDispatcher;
pub use composing_event_handler::ComposingEventHandler;
pub use messages_event_handler::MessagesEventHandler;
pub use remote_event_handler::{RemoteEventHandler, RemoteEventHandlerQueue};

mod client_event_dispatcher;
mod composing_event_handler;
mod messages_event_handler;
mod remote_event_handler;
