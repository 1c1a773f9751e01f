// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiResult;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default simulated latency of the mock service, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 200;

/// When the mock service should fail.
///
/// Failure injection is deterministic; there is no random failure rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureMode {
    /// Every request succeeds.
    #[default]
    Never,
    /// Every request fails.
    Always,
    /// The next `n` requests fail, then requests succeed again.
    FailNext(u32),
}

/// Configuration for the mock people service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Simulated latency applied to every request.
    pub delay_ms: u64,
    /// Initial failure mode.
    pub failure_mode: FailureMode,
}

impl SourceConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidData` if the JSON is malformed.
    pub fn from_json(json: &str) -> ApiResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns a configuration with no latency, for tests and tooling.
    #[must_use]
    pub const fn immediate() -> Self {
        Self {
            delay_ms: 0,
            failure_mode: FailureMode::Never,
        }
    }

    /// Returns the simulated latency.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
            failure_mode: FailureMode::Never,
        }
    }
}
