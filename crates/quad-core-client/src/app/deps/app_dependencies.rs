// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::AppContext;
use crate::app::event_handlers::ClientEventDispatcher;
use crate::domain::messaging::repos::MessagesRepository;
use crate::domain::messaging::services::{MessageStreamService, MessagingService};
use crate::domain::rooms::repos::ConnectedRoomsRepository;
use crate::domain::rooms::services::RoomManagementService;
use crate::domain::shared::services::{IDProvider, TimeProvider};
use crate::domain::uploads::services::UploadService;

pub type DynAppContext = Arc<AppContext>;
pub type DynClientEventDispatcher = Arc<ClientEventDispatcher>;
pub type DynConnectedRoomsRepository = Arc<dyn ConnectedRoomsRepository>;
pub type DynIDProvider = Arc<dyn IDProvider>;
pub type DynMessageStreamService = Arc<dyn MessageStreamService>;
pub type DynMessagesRepository = Arc<dyn MessagesRepository>;
pub type DynMessagingService = Arc<dyn MessagingService>;
pub type DynRoomManagementService = Arc<dyn RoomManagementService>;
pub type DynTimeProvider = Arc<dyn TimeProvider>;
pub type DynUploadService = Arc<dyn UploadService>;

pub struct AppDependencies {
    pub ctx: DynAppContext,
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub connected_rooms_repo: DynConnectedRoomsRepository,
    pub messages_repo: DynMessagesRepository,
    pub messaging_service: DynMessagingService,
    pub message_stream_service: DynMessageStreamService,
    pub room_management_service: DynRoomManagementService,
    pub upload_service: DynUploadService,
    pub time_provider: DynTimeProvider,
    /// Generates the short correlation ids attached to outgoing messages.
    pub short_id_provider: DynIDProvider,
}
