//! Unit tests for settings module.

use gridpointer::settings::{
    HandleMargins, InteractionSettings, SettingsError, default_settings_path,
};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_load_from_partial_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "label_row": 3, "autoscroll": { "min_interval_ms": 10.0 } }"#).unwrap();

    let settings = InteractionSettings::load_from(&path).unwrap();
    assert_eq!(settings.label_row, 3);
    assert_eq!(settings.autoscroll.min_interval_ms, 10.0);
    assert_eq!(settings.autoscroll.timeout_for(1000.0), Duration::from_millis(10));
    assert_eq!(settings.filter_row, InteractionSettings::default().filter_row);
}

#[test]
fn test_load_from_partial_handle_band() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(
        &path,
        r#"{
            "header_handles": { "leading": 4.0 },
            "column_header_handles": { "trailing": 9.0 }
        }"#,
    )
    .unwrap();

    let settings = InteractionSettings::load_from(&path).unwrap();
    assert_eq!(settings.header_handles.leading, 4.0);
    assert_eq!(settings.header_handles.trailing, HandleMargins::HEADER.trailing);
    assert_eq!(settings.column_header_handles.leading, HandleMargins::COLUMN_HEADER.leading);
    assert_eq!(settings.column_header_handles.trailing, 9.0);
    assert_eq!(settings.editor_inset, InteractionSettings::default().editor_inset);
}

#[test]
fn test_load_from_invalid_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    let err = InteractionSettings::load_from(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Parse { .. }));
    assert!(err.to_string().contains("settings.json"));
}

#[test]
fn test_load_from_missing_file() {
    let dir = tempdir().unwrap();
    let err = InteractionSettings::load_from(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, SettingsError::Io { .. }));
}

#[test]
fn test_json_roundtrip_preserves_everything() {
    let mut settings = InteractionSettings::default();
    settings.editor_inset = 0.0;
    settings.tooltip.offset_y = 30.0;
    let json = settings.to_json().unwrap();
    assert_eq!(InteractionSettings::from_json(&json).unwrap(), settings);
}

#[test]
fn test_default_paths() {
    // Some on most systems
    let path = default_settings_path();
    assert!(path.is_none() || path.is_some_and(|p| p.ends_with("gridpointer/settings.json")));
}
