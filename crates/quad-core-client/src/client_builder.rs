// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;

use crate::app::deps::{AppConfig, AppContext, AppDependencies};
use crate::app::event_handlers::{
    ClientEventDispatcher, ComposingEventHandler, MessagesEventHandler, RemoteEventHandler,
    RemoteEventHandlerQueue,
};
use crate::app::services::{ChatService, RoomsService};
use crate::client::ClientInner;
use crate::domain::messaging::models::{RemoteEvent, RemoteEventSink};
use crate::domain::messaging::services::{MessageStreamService, MessagingService};
use crate::domain::rooms::services::RoomManagementService;
use crate::domain::shared::models::LocalUser;
use crate::domain::shared::services::{IDProvider, SystemTimeProvider, TimeProvider};
use crate::domain::uploads::services::UploadService;
use crate::infra::general::NanoIDProvider;
use crate::infra::messaging::InMemoryMessagesRepository;
use crate::infra::rooms::InMemoryConnectedRoomsRepository;
use crate::{Client, ClientDelegate};

pub struct UndefinedGateways;
pub struct UndefinedCurrentUser;

/// The four gateway boundaries a client needs to talk to a backend.
pub struct Gateways {
    room_management_service: Arc<dyn RoomManagementService>,
    messaging_service: Arc<dyn MessagingService>,
    message_stream_service: Arc<dyn MessageStreamService>,
    upload_service: Arc<dyn UploadService>,
}

pub struct ClientBuilder<G, U> {
    gateways: G,
    current_user: U,
    config: AppConfig,
    delegate: Option<Box<dyn ClientDelegate>>,
    time_provider: Arc<dyn TimeProvider>,
    short_id_provider: Arc<dyn IDProvider>,
}

impl ClientBuilder<UndefinedGateways, UndefinedCurrentUser> {
    pub(crate) fn new() -> Self {
        ClientBuilder {
            gateways: UndefinedGateways,
            current_user: UndefinedCurrentUser,
            config: AppConfig::default(),
            delegate: None,
            time_provider: Arc::new(SystemTimeProvider::default()),
            short_id_provider: Arc::new(NanoIDProvider::default()),
        }
    }
}

impl<G, U> ClientBuilder<G, U> {
    pub fn set_gateways(
        self,
        room_management_service: Arc<dyn RoomManagementService>,
        messaging_service: Arc<dyn MessagingService>,
        message_stream_service: Arc<dyn MessageStreamService>,
        upload_service: Arc<dyn UploadService>,
    ) -> ClientBuilder<Gateways, U> {
        ClientBuilder {
            gateways: Gateways {
                room_management_service,
                messaging_service,
                message_stream_service,
                upload_service,
            },
            current_user: self.current_user,
            config: self.config,
            delegate: self.delegate,
            time_provider: self.time_provider,
            short_id_provider: self.short_id_provider,
        }
    }

    pub fn set_current_user(self, user: LocalUser) -> ClientBuilder<G, LocalUser> {
        ClientBuilder {
            gateways: self.gateways,
            current_user: user,
            config: self.config,
            delegate: self.delegate,
            time_provider: self.time_provider,
            short_id_provider: self.short_id_provider,
        }
    }

    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn set_delegate(mut self, delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }

    pub fn set_time_provider<T: TimeProvider + 'static>(mut self, time_provider: T) -> Self {
        self.time_provider = Arc::new(time_provider);
        self
    }

    pub fn set_short_id_provider<P: IDProvider + 'static>(mut self, id_provider: P) -> Self {
        self.short_id_provider = Arc::new(id_provider);
        self
    }
}

impl ClientBuilder<Gateways, LocalUser> {
    /// Assembles the client. Must be called within a Tokio runtime; the client spawns its
    /// event loop right away.
    pub fn build(self) -> Client {
        let ctx = Arc::new(AppContext::new(self.current_user, self.config));
        let dispatcher = Arc::new(ClientEventDispatcher::new(self.delegate));

        let deps = AppDependencies {
            ctx: ctx.clone(),
            client_event_dispatcher: dispatcher.clone(),
            connected_rooms_repo: Arc::new(InMemoryConnectedRoomsRepository::new()),
            messages_repo: Arc::new(InMemoryMessagesRepository::new()),
            messaging_service: self.gateways.messaging_service,
            message_stream_service: self.gateways.message_stream_service,
            room_management_service: self.gateways.room_management_service,
            upload_service: self.gateways.upload_service,
            time_provider: self.time_provider,
            short_id_provider: self.short_id_provider,
        };

        let event_queue = Arc::new(RemoteEventHandlerQueue::new());
        event_queue.set_handlers(vec![
            Box::new(MessagesEventHandler::from(&deps)) as Box<dyn RemoteEventHandler>,
            Box::new(ComposingEventHandler::from(&deps)),
        ]);

        // Subscriptions may deliver from any task. The events funnel through one channel and
        // one consumer, which keeps application strictly in arrival order.
        let (tx, mut rx) = mpsc::unbounded_channel::<RemoteEvent>();
        let consumer_queue = event_queue.clone();
        let event_task = tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                consumer_queue.handle_event(event).await;
            }
        });
        let event_sink: RemoteEventSink = Arc::new(move |event| {
            _ = tx.send(event);
        });

        let inner = Arc::new(ClientInner {
            chat: ChatService::new(&deps, event_sink),
            rooms: RoomsService::from(&deps),
            ctx,
            event_task: Mutex::new(Some(event_task)),
            #[cfg(any(test, feature = "test"))]
            event_queue,
        });

        dispatcher.set_client_inner(Arc::downgrade(&inner));
        Client::from(inner)
    }
}
