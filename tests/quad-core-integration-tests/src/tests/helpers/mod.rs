// quad-core-client/quad-core-integration-tests
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use test_env::{RecordingDelegate, TestEnv, TestEnvBuilder};

pub mod fixtures;
mod test_env;
