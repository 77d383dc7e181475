// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use client::{Client, ClientDelegate};
pub use client_builder::{ClientBuilder, Gateways, UndefinedCurrentUser, UndefinedGateways};
pub use client_event::{ClientEvent, RoomEventType};

#[cfg(any(test, feature = "test"))]
pub mod test;

pub mod app;
mod client;
mod client_builder;
mod client_event;

#[cfg(feature = "test")]
pub mod domain;
#[cfg(not(feature = "test"))]
pub(crate) mod domain;

#[cfg(feature = "test")]
pub mod infra;
#[cfg(not(feature = "test"))]
pub(crate) mod infra;

pub(crate) mod util;

pub use app::dtos;
pub use app::services;

pub use domain::messaging::services::{MessageStreamService, MessagingService, Subscription};
pub use domain::rooms::models::{Occupant, Room, RoomInfo, RoomState};
pub use domain::rooms::services::{CreateRoomRequest, RoomManagementService};
pub use domain::shared::services::{
    IDProvider, SystemTimeProvider, TimeProvider, UUIDProvider,
};
pub use domain::uploads::services::UploadService;
