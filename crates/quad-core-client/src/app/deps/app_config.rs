// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// How long a typing ping stays live without a refresh, on both the sending and the
    /// receiving side.
    pub typing_timeout: Duration,
    /// Number of messages loaded into the window when a room is selected.
    pub message_page_size: u32,
    /// Maximum number of characters in a notification body preview.
    pub notification_preview_length: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            typing_timeout: Duration::from_secs(3),
            message_page_size: 50,
            notification_preview_length: 120,
        }
    }
}
