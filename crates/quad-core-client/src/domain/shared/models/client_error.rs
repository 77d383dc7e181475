// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use thiserror::Error;

use crate::domain::shared::models::{MessageId, RoomId};

/// Failures reported by the remote gateway. `Network` is transient and may be retried by the
/// caller, `NotAuthenticated` must bubble up to the session layer untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(String),

    #[error("not authenticated")]
    NotAuthenticated,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("validation failed: {0}")]
    Validation(String),
}

/// Errors surfaced to the caller. Each variant names the action that failed so that the UI can
/// describe what went wrong next to `last_error`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChatError {
    #[error("failed to load rooms: {0}")]
    LoadRoomsFailed(GatewayError),

    #[error("failed to create room: {0}")]
    CreateRoomFailed(GatewayError),

    #[error("failed to load messages: {0}")]
    LoadMessagesFailed(GatewayError),

    #[error("failed to subscribe to room events: {0}")]
    SubscribeFailed(GatewayError),

    #[error("failed to send message: {0}")]
    SendFailed(GatewayError),

    #[error("failed to edit message: {0}")]
    EditFailed(GatewayError),

    #[error("failed to delete message: {0}")]
    DeleteFailed(GatewayError),

    #[error("failed to update reaction: {0}")]
    ReactionFailed(GatewayError),

    #[error("failed to mark room as read: {0}")]
    MarkReadFailed(GatewayError),

    #[error("search failed: {0}")]
    SearchFailed(GatewayError),

    #[error("{0}")]
    Validation(String),

    #[error("no room is selected")]
    NoRoomSelected,

    #[error("unknown room '{0}'")]
    RoomNotFound(RoomId),

    #[error("unknown message '{0}'")]
    MessageNotFound(MessageId),
}

impl ChatError {
    /// `true` if retrying the same action may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            ChatError::LoadRoomsFailed(err)
            | ChatError::CreateRoomFailed(err)
            | ChatError::LoadMessagesFailed(err)
            | ChatError::SubscribeFailed(err)
            | ChatError::SendFailed(err)
            | ChatError::EditFailed(err)
            | ChatError::DeleteFailed(err)
            | ChatError::ReactionFailed(err)
            | ChatError::MarkReadFailed(err)
            | ChatError::SearchFailed(err) => matches!(err, GatewayError::Network(_)),
            ChatError::Validation(_)
            | ChatError::NoRoomSelected
            | ChatError::RoomNotFound(_)
            | ChatError::MessageNotFound(_) => false,
        }
    }
}
