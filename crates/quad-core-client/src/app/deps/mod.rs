// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app_config::AppConfig;
pub use app_context::AppContext;

#[cfg(any(test, feature = "test"))]
pub use app_dependencies::*;
#[cfg(not(any(test, feature = "test")))]
pub(crate) use app_dependencies::*;

mod app_config;
mod app_context;
mod app_dependencies;
