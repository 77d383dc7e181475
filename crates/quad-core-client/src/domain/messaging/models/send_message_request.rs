// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::messaging::models::Attachment;
use crate::domain::shared::models::{MessageId, MessageLocalId};

/// The payload for creating a message record. Attachments have been uploaded at this point;
/// `local_id` must be echoed back on the created record.
#[derive(Debug, Clone, PartialEq)]
pub struct SendMessageRequest {
    pub local_id: MessageLocalId,
    pub body: Option<String>,
    pub attachments: Vec<Attachment>,
    pub reply_to: Option<MessageId>,
}
