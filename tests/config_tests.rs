//! Configuration loading and validation.

mod common;

use common::init_tracing;
use railfence::{RailFence, RailFenceConfig, RailFenceError};

#[test]
fn empty_json_is_default_cipher() {
    let config: RailFenceConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, RailFenceConfig::default());

    let rf = RailFence::from_config(config).unwrap();
    assert_eq!(rf, RailFence::default());
}

#[test]
fn keyed_json_config() {
    init_tracing();
    let config: RailFenceConfig = serde_json::from_str(r#"{"rows": 4, "mask": "bcaf"}"#).unwrap();
    let rf = RailFence::from_config(config).unwrap();
    assert_eq!(rf.encrypt("helloworld", false).unwrap(), "loholewdlr");
}

#[test]
fn null_mask_is_unkeyed() {
    let config: RailFenceConfig = serde_json::from_str(r#"{"rows": 3, "mask": null}"#).unwrap();
    assert_eq!(config, RailFenceConfig::new(3));
}

#[test]
fn invalid_json_config_rejected_at_build() {
    let config: RailFenceConfig = serde_json::from_str(r#"{"rows": 1}"#).unwrap();
    assert_eq!(
        RailFence::from_config(config),
        Err(RailFenceError::InvalidRowCount { rows: 1 })
    );

    let config: RailFenceConfig = serde_json::from_str(r#"{"rows": 3, "mask": "aa1"}"#).unwrap();
    assert!(matches!(
        RailFence::from_config(config),
        Err(RailFenceError::DuplicateMaskRank { ch: 'a', .. })
    ));
}

#[test]
fn mistyped_mask_is_a_deserialization_error() {
    let result: Result<RailFenceConfig, _> = serde_json::from_str(r#"{"rows": 3, "mask": 7}"#);
    assert!(result.is_err());
}

#[test]
fn config_serializes_back() {
    let config = RailFenceConfig::new(6).with_mask("ZEBRAS");
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"rows":6,"mask":"ZEBRAS"}"#);

    let rf = RailFence::from_config(config.clone()).unwrap();
    assert_eq!(rf.config(), &config);
}
