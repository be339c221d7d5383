pub mod test_utils;
use std::fs;
use tempdir::TempDir;
use ugv_core::config::{StoreConfig, LONDON, TALLINN};
use ugv_core::position::{Position, DEFAULT_STEP};

#[test]
fn defaults() {
    let config = StoreConfig::default();
    assert_eq!(config.default_position, LONDON);
    assert_eq!(config.step, DEFAULT_STEP);
    assert_eq!(config.default_waypoint_name, "New Waypoint");
    assert_eq!(StoreConfig::tallinn().default_position, TALLINN);
    assert_eq!(StoreConfig::tallinn().step, DEFAULT_STEP);
}

#[test]
fn from_json_str() {
    let config = StoreConfig::from_json_str(
        r#"{
            "defaultPosition": { "lat": 59.437, "lng": 24.7536 },
            "step": 0.001,
            "defaultWaypointName": "Checkpoint"
        }"#,
    )
    .unwrap();
    assert_eq!(config.default_position, Position::new(59.437, 24.7536));
    assert_eq!(config.step, 0.001);
    assert_eq!(config.default_waypoint_name, "Checkpoint");
}

#[test]
fn from_json_str_missing_fields() {
    let config = StoreConfig::from_json_str("{}").unwrap();
    assert_eq!(config, StoreConfig::default());

    let config = StoreConfig::from_json_str(r#"{ "step": 0.01 }"#).unwrap();
    assert_eq!(config.default_position, LONDON);
    assert_eq!(config.step, 0.01);
}

#[test]
fn invalid_config() {
    assert!(StoreConfig::from_json_str(r#"{ "step": 0 }"#).is_err());
    assert!(StoreConfig::from_json_str(r#"{ "step": -0.5 }"#).is_err());
    assert!(StoreConfig::from_json_str(r#"{ "step": "big" }"#).is_err());
    assert!(StoreConfig::from_json_str("not json").is_err());
}

#[test]
fn load() {
    let temp_dir = TempDir::new("config-load").unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(
        &path,
        serde_json::to_string_pretty(&StoreConfig::tallinn()).unwrap(),
    )
    .unwrap();
    assert_eq!(StoreConfig::load(&path).unwrap(), StoreConfig::tallinn());

    assert!(StoreConfig::load(temp_dir.path().join("missing.json")).is_err());
}
