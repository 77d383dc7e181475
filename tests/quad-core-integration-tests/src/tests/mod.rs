// quad-core-client/quad-core-integration-tests
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use tokio::test as async_test;

mod helpers;
mod reconciliation;
mod room_selection;
mod typing;
