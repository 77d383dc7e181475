// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

/// Whether a user is actively typing in a room. This is ephemeral client state and is never
/// persisted; an entry only counts as "typing" while its last ping is within the typing timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposeState {
    Composing,
    #[default]
    Idle,
}
