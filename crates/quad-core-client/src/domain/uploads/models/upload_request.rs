// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};

use mime::Mime;

/// A file to be uploaded to the blob store before a message referencing it is created.
#[derive(Clone, PartialEq)]
pub struct UploadRequest {
    pub file_name: String,
    pub media_type: Mime,
    pub data: Vec<u8>,
}

impl Debug for UploadRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadRequest")
            .field("file_name", &self.file_name)
            .field("media_type", &self.media_type)
            .field("size", &self.data.len())
            .finish()
    }
}
