// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::Duration;
use parking_lot::RwLock;

use crate::app::deps::AppConfig;
use crate::domain::shared::models::{LocalUser, RoomId};

pub struct AppContext {
    pub user: LocalUser,
    pub config: AppConfig,
    selected_room: RwLock<Option<RoomId>>,
}

impl AppContext {
    pub fn new(user: LocalUser, config: AppConfig) -> Self {
        AppContext {
            user,
            config,
            selected_room: Default::default(),
        }
    }

    pub fn selected_room(&self) -> Option<RoomId> {
        self.selected_room.read().clone()
    }

    pub fn set_selected_room(&self, room_id: Option<RoomId>) {
        *self.selected_room.write() = room_id;
    }

    pub fn is_selected_room(&self, room_id: &RoomId) -> bool {
        self.selected_room.read().as_ref() == Some(room_id)
    }

    /// The typing timeout as a chrono duration, for timestamp math.
    pub fn typing_timeout(&self) -> Duration {
        Duration::from_std(self.config.typing_timeout).unwrap_or_else(|_| Duration::seconds(3))
    }
}
