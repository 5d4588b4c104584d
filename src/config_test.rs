#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_settings() {
    let s = ProjectSettings::default();
    assert_eq!(s.zoom, None);
    assert!(!s.show_collisions);
    assert_eq!(s.zoom_ratio(), 1.0);
}

#[test]
fn zoom_ratio_from_percent() {
    let s = ProjectSettings { zoom: Some(200), show_collisions: false };
    assert_eq!(s.zoom_ratio(), 2.0);
    assert_eq!(s.camera().zoom, 2.0);
    let s = ProjectSettings { zoom: Some(50), show_collisions: false };
    assert_eq!(s.zoom_ratio(), 0.5);
}

#[test]
fn zero_zoom_falls_back_to_default_ratio() {
    let s = ProjectSettings { zoom: Some(0), show_collisions: false };
    assert_eq!(s.zoom_ratio(), 1.0);
}

#[test]
fn show_collisions_forced_by_collisions_tool() {
    let s = ProjectSettings::default();
    assert!(!s.show_collisions(Tool::Select));
    assert!(!s.show_collisions(Tool::Eraser));
    assert!(s.show_collisions(Tool::Collisions));
}

#[test]
fn show_collisions_setting_applies_to_every_tool() {
    let s = ProjectSettings { zoom: None, show_collisions: true };
    assert!(s.show_collisions(Tool::Select));
    assert!(s.show_collisions(Tool::Eraser));
}

#[test]
fn from_json_reads_camel_case_fields() {
    let s = ProjectSettings::from_json(r#"{"zoom": 300, "showCollisions": true}"#).unwrap();
    assert_eq!(s.zoom, Some(300));
    assert!(s.show_collisions);
}

#[test]
fn from_json_empty_object_uses_defaults() {
    let s = ProjectSettings::from_json("{}").unwrap();
    assert_eq!(s, ProjectSettings::default());
}

#[test]
fn from_json_rejects_zero_zoom() {
    let err = ProjectSettings::from_json(r#"{"zoom": 0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidZoom));
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = ProjectSettings::from_json(r#"{"zoom": "big"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("settings parse failed"));
}
