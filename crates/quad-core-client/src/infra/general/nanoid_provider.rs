// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::services::IDProvider;

/// Generates short ids, used for message correlation ids where a full UUID is overkill.
#[derive(Default)]
pub struct NanoIDProvider {}

impl IDProvider for NanoIDProvider {
    fn new_id(&self) -> String {
        nanoid::nanoid!(12)
    }
}
