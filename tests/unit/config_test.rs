//! Tests for configuration validation

use kiln_scheduler::config::SchedulerConfig;
use kiln_scheduler::util::serde::ResourceId;

#[test]
fn test_valid_config() {
    let cfg = SchedulerConfig::with_target(4);
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_invalid_default_target() {
    let cfg = SchedulerConfig::with_target(0);
    assert!(cfg.validate().is_err());
}

#[test]
fn test_invalid_resource_override() {
    let cfg = SchedulerConfig::with_target(4).with_resource("glaze-kiln", 0);
    assert!(cfg.validate().is_err());
}

#[test]
fn test_target_resolution() {
    let cfg = SchedulerConfig::with_target(4)
        .with_resource("glaze-kiln", 6)
        .with_resource("test-kiln", 2);
    assert_eq!(cfg.capacity_target_for(&ResourceId::from("glaze-kiln")), 6);
    assert_eq!(cfg.capacity_target_for(&ResourceId::from("test-kiln")), 2);
    assert_eq!(cfg.capacity_target_for(&ResourceId::default()), 4);
}

#[test]
fn test_from_json_str() {
    let cfg = SchedulerConfig::from_json_str(
        r#"{
            "default_capacity_target": 4,
            "resources": {
                "glaze-kiln": { "capacity_target": 6 }
            }
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.default_capacity_target, 4);
    assert_eq!(cfg.capacity_target_for(&ResourceId::from("glaze-kiln")), 6);
}

#[test]
fn test_from_json_str_rejects_zero_target() {
    let result = SchedulerConfig::from_json_str(r#"{"default_capacity_target": 0}"#);
    assert!(result.is_err());
}

#[test]
fn test_from_json_str_rejects_garbage() {
    assert!(SchedulerConfig::from_json_str("not json").is_err());
    assert!(SchedulerConfig::from_json_str("{}").is_err());
}

#[test]
fn test_config_serde_round_trip() {
    let cfg = SchedulerConfig::with_target(4).with_resource("glaze-kiln", 6);
    let json = serde_json::to_string(&cfg).unwrap();
    let back = SchedulerConfig::from_json_str(&json).unwrap();
    assert_eq!(back.default_capacity_target, cfg.default_capacity_target);
    assert_eq!(
        back.capacity_target_for(&ResourceId::from("glaze-kiln")),
        6
    );
}
