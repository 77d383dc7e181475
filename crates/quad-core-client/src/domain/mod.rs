// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod messaging;
pub mod rooms;
pub mod shared;
pub mod uploads;
