// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use upload_service::UploadService;

#[cfg(any(test, feature = "test"))]
pub use upload_service::MockUploadService;

mod upload_service;
