// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use string_ext::StringExt;

pub mod mime_serde_shim;
pub mod string_ext;
