// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use mime::Mime;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::shared::models::AttachmentId;
use crate::util::mime_serde_shim;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: AttachmentId,
    pub kind: AttachmentKind,
    pub url: Url,
    pub file_name: String,
    pub file_size: u64,
    #[serde(with = "mime_serde_shim")]
    pub media_type: Mime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttachmentKind {
    Image,
    Video,
    Audio,
    File,
}

impl AttachmentKind {
    pub fn for_media_type(media_type: &Mime) -> Self {
        match media_type.type_() {
            mime::IMAGE => AttachmentKind::Image,
            mime::VIDEO => AttachmentKind::Video,
            mime::AUDIO => AttachmentKind::Audio,
            _ => AttachmentKind::File,
        }
    }
}
