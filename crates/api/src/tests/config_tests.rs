// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ApiError, DEFAULT_DELAY_MS, FailureMode, SourceConfig};
use std::time::Duration;

#[test]
fn test_default_config() {
    let config: SourceConfig = SourceConfig::default();
    assert_eq!(config.delay_ms, DEFAULT_DELAY_MS);
    assert_eq!(config.delay(), Duration::from_millis(200));
    assert_eq!(config.failure_mode, FailureMode::Never);
}

#[test]
fn test_config_from_json_fills_defaults() {
    let config: SourceConfig = SourceConfig::from_json(r#"{ "delay_ms": 5 }"#).unwrap();
    assert_eq!(config.delay_ms, 5);
    assert_eq!(config.failure_mode, FailureMode::Never);

    let config: SourceConfig = SourceConfig::from_json("{}").unwrap();
    assert_eq!(config, SourceConfig::default());
}

#[test]
fn test_config_failure_modes_from_json() {
    let config: SourceConfig =
        SourceConfig::from_json(r#"{ "failure_mode": "always" }"#).unwrap();
    assert_eq!(config.failure_mode, FailureMode::Always);

    let config: SourceConfig =
        SourceConfig::from_json(r#"{ "failure_mode": { "fail_next": 2 } }"#).unwrap();
    assert_eq!(config.failure_mode, FailureMode::FailNext(2));
}

#[test]
fn test_malformed_config_is_rejected() {
    let result: Result<SourceConfig, ApiError> =
        SourceConfig::from_json(r#"{ "failure_mode": "sometimes" }"#);
    assert!(matches!(result, Err(ApiError::InvalidData(_))));
}

#[test]
fn test_immediate_config_has_no_delay() {
    assert!(SourceConfig::immediate().delay().is_zero());
}
