// quad-core-client/quad-core-integration-tests
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use mockall::predicate;
use parking_lot::Mutex;

use quad_core_client::domain::messaging::services::{
    MockMessageStreamService, MockMessagingService,
};
use quad_core_client::domain::rooms::services::MockRoomManagementService;
use quad_core_client::domain::uploads::services::MockUploadService;
use quad_core_client::dtos::{ChatStateSnapshot, LocalUser, Message, RemoteEvent, RoomId};
use quad_core_client::test::{ConstantTimeProvider, IncrementingIDProvider};
use quad_core_client::{Client, ClientDelegate, ClientEvent, Room, Subscription};

pub struct RecordingDelegate {
    events: Arc<Mutex<Vec<ClientEvent>>>,
}

impl ClientDelegate for RecordingDelegate {
    fn handle_event(&self, _client: Client, event: ClientEvent) {
        self.events.lock().push(event)
    }
}

/// Wires a client against mocked gateways. Tests arm expectations on the mocks, then call
/// `start` with the rooms the backend should report.
pub struct TestEnvBuilder {
    pub messaging: MockMessagingService,
    pub stream: MockMessageStreamService,
    pub room_management: MockRoomManagementService,
    pub uploads: MockUploadService,
    pub time_provider: ConstantTimeProvider,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        TestEnvBuilder {
            messaging: MockMessagingService::new(),
            stream: MockMessageStreamService::new(),
            room_management: MockRoomManagementService::new(),
            uploads: MockUploadService::new(),
            time_provider: ConstantTimeProvider::ymd_hms(2025, 2, 1, 10, 0, 0),
        }
    }

    /// Arms both subscriptions for `room_id`. Cancellations are recorded in the returned log
    /// as `messages:<room>` and `updates:<room>`.
    pub fn expect_subscriptions(&mut self, room_id: &str) -> Arc<Mutex<Vec<String>>> {
        let log = Arc::new(Mutex::new(Vec::new()));

        let cancel_log = log.clone();
        let label = format!("messages:{room_id}");
        self.stream
            .expect_subscribe_to_messages()
            .with(predicate::eq(RoomId::from(room_id)), predicate::always())
            .returning(move |_, _| {
                let cancel_log = cancel_log.clone();
                let label = label.clone();
                Ok(Subscription::new(move || cancel_log.lock().push(label)))
            });

        let cancel_log = log.clone();
        let label = format!("updates:{room_id}");
        self.stream
            .expect_subscribe_to_message_updates()
            .with(predicate::eq(RoomId::from(room_id)), predicate::always())
            .returning(move |_, _| {
                let cancel_log = cancel_log.clone();
                let label = label.clone();
                Ok(Subscription::new(move || cancel_log.lock().push(label)))
            });

        log
    }

    /// Arms everything `select_room` needs: subscriptions, the initial page (newest first, as
    /// the backend returns it) and the read receipt.
    pub fn expect_room_selection(
        &mut self,
        room_id: &str,
        page_newest_first: Vec<Message>,
    ) -> Arc<Mutex<Vec<String>>> {
        let log = self.expect_subscriptions(room_id);

        self.messaging
            .expect_load_messages()
            .with(
                predicate::eq(RoomId::from(room_id)),
                predicate::always(),
                predicate::always(),
            )
            .return_once(move |_, _, _| Ok(page_newest_first));
        self.messaging
            .expect_mark_read()
            .with(predicate::eq(RoomId::from(room_id)))
            .returning(|_| Ok(()));

        log
    }

    /// Builds the client and loads `rooms` as the connected-room set.
    pub async fn start(mut self, rooms: Vec<Room>) -> Result<TestEnv> {
        self.room_management
            .expect_load_rooms()
            .return_once(move |_| Ok(rooms));

        let events = Arc::new(Mutex::new(Vec::new()));
        let client = Client::builder()
            .set_gateways(
                Arc::new(self.room_management),
                Arc::new(self.messaging),
                Arc::new(self.stream),
                Arc::new(self.uploads),
            )
            .set_current_user(LocalUser {
                id: "me".into(),
                name: "Mel River".to_string(),
                avatar: None,
            })
            .set_delegate(Some(Box::new(RecordingDelegate {
                events: events.clone(),
            })))
            .set_time_provider(self.time_provider.clone())
            .set_short_id_provider(IncrementingIDProvider::new("local"))
            .build();

        client.rooms.load_rooms().await?;

        Ok(TestEnv {
            client,
            events,
            time_provider: self.time_provider,
        })
    }
}

pub struct TestEnv {
    pub client: Client,
    pub events: Arc<Mutex<Vec<ClientEvent>>>,
    pub time_provider: ConstantTimeProvider,
}

impl TestEnv {
    pub fn snapshot(&self) -> ChatStateSnapshot {
        self.client.chat.snapshot()
    }

    /// Feeds a remote event through the reconciliation pipeline and waits for it to be
    /// fully applied.
    pub async fn apply(&self, event: RemoteEvent) {
        self.client.apply_remote_event(event).await
    }

    pub fn drain_events(&self) -> Vec<ClientEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}
