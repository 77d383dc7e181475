// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::app::deps::DynAppContext;
use crate::app::services::{ChatService, RoomsService};
use crate::client_builder::{ClientBuilder, UndefinedCurrentUser, UndefinedGateways};
use crate::domain::shared::models::LocalUser;
use crate::ClientEvent;

/// Receives client events on the caller's side, e.g. the UI layer. Events for one client are
/// delivered sequentially.
pub trait ClientDelegate: Send + Sync {
    fn handle_event(&self, client: Client, event: ClientEvent);
}

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

pub struct ClientInner {
    pub chat: ChatService,
    pub rooms: RoomsService,
    pub(crate) ctx: DynAppContext,
    pub(crate) event_task: Mutex<Option<JoinHandle<()>>>,
    #[cfg(any(test, feature = "test"))]
    pub(crate) event_queue: Arc<crate::app::event_handlers::RemoteEventHandlerQueue>,
}

impl From<Arc<ClientInner>> for Client {
    fn from(inner: Arc<ClientInner>) -> Self {
        Client { inner }
    }
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Client {
    pub fn builder() -> ClientBuilder<UndefinedGateways, UndefinedCurrentUser> {
        ClientBuilder::new()
    }

    pub fn current_user(&self) -> LocalUser {
        self.ctx.user.clone()
    }

    /// Shuts the client down: the room selection is torn down with its subscriptions and the
    /// event loop stops.
    pub fn close(&self) {
        self.chat.close();
        if let Some(task) = self.event_task.lock().take() {
            task.abort();
        }
    }

    /// Feeds a remote event straight into the reconciliation pipeline, bypassing the gateway
    /// subscriptions. Deterministic; the event is fully applied when this returns.
    #[cfg(any(test, feature = "test"))]
    pub async fn apply_remote_event(&self, event: crate::dtos::RemoteEvent) {
        self.event_queue.handle_event(event).await
    }
}
