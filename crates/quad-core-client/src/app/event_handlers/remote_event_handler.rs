// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::OnceLock;

use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, warn};

use crate::domain::messaging::models::RemoteEvent;

/// A handler in the reconciliation pipeline. Returning `Ok(None)` consumes the event,
/// `Ok(Some(event))` passes it on to the next handler.
#[async_trait]
pub trait RemoteEventHandler: Send + Sync {
    fn name(&self) -> &'static str;
    async fn handle_event(&self, event: RemoteEvent) -> Result<Option<RemoteEvent>>;
}

/// Runs each incoming event through the registered handlers in order. Events are handed to
/// the queue one at a time, so per-room arrival order is preserved end to end.
pub struct RemoteEventHandlerQueue {
    handlers: OnceLock<Vec<Box<dyn RemoteEventHandler>>>,
}

impl RemoteEventHandlerQueue {
    pub fn new() -> Self {
        RemoteEventHandlerQueue {
            handlers: OnceLock::new(),
        }
    }

    pub fn set_handlers(&self, handlers: Vec<Box<dyn RemoteEventHandler>>) {
        if self.handlers.set(handlers).is_err() {
            warn!("Tried to set remote event handlers more than once.");
        }
    }

    pub async fn handle_event(&self, event: RemoteEvent) {
        let Some(handlers) = self.handlers.get() else {
            warn!("Received remote event before handlers were set. Dropping it.");
            return;
        };

        let mut event = event;
        for handler in handlers {
            match handler.handle_event(event).await {
                Ok(None) => return,
                Ok(Some(e)) => event = e,
                Err(error) => {
                    error!(
                        handler = handler.name(),
                        %error,
                        "Remote event handler failed."
                    );
                    return;
                }
            }
        }

        warn!(room = %event.room_id(), "No handler consumed remote event.");
    }
}
