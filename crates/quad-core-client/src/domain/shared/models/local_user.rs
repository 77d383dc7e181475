// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use url::Url;

use crate::domain::shared::models::UserId;

/// The logged-in user as seen by the chat core. Authentication happens outside of this crate;
/// the session layer hands us the resolved identity when building the client.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalUser {
    pub id: UserId,
    pub name: String,
    pub avatar: Option<Url>,
}
