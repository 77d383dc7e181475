// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use constant_time_provider::ConstantTimeProvider;
pub use incrementing_id_provider::IncrementingIDProvider;
pub use message_builder::MessageBuilder;
pub use room_builder::RoomBuilder;
