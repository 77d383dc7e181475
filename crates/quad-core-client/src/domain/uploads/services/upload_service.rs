// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::messaging::models::Attachment;
use crate::domain::shared::models::GatewayError;
use crate::domain::uploads::models::UploadRequest;

/// The blob-upload boundary. Failures are per file and non-fatal to the rest of a batch send:
/// the engine skips the failed file and keeps going.
#[cfg_attr(any(test, feature = "test"), mockall::automock)]
#[async_trait]
pub trait UploadService: Send + Sync {
    async fn upload(&self, request: UploadRequest) -> Result<Attachment, GatewayError>;
}
