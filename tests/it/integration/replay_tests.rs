//! Replay Script Integration Tests

use gridpointer::replay::ReplayScript;
use gridpointer::settings::InteractionSettings;
use gridpointer::types::{CellRange, ClearMode};

const EDIT_AND_DRAG: &str = r#"{
    "grid": { "rows": 100, "columns": 20, "viewport_width": 400, "viewport_height": 300 },
    "cells": [{ "row": 3, "column": 2, "value": "42" }],
    "events": [
        { "type": "down", "x": 224, "y": 110 },
        { "type": "up", "x": 224, "y": 110 },
        { "type": "down", "x": 224, "y": 110 },
        { "type": "up", "x": 224, "y": 110 },
        { "type": "key", "key": "Enter", "value": "7" },
        { "type": "down", "x": 160, "y": 150 },
        { "type": "move", "x": 288, "y": 190 },
        { "type": "up", "x": 288, "y": 190 }
    ]
}"#;

#[test]
fn test_replay_edit_then_drag() {
    let script = ReplayScript::from_json(EDIT_AND_DRAG).unwrap();
    let report = script.run(None);

    insta::assert_json_snapshot!(report.writes, @r###"
    [
      {
        "region": "body",
        "row": 3,
        "column": 2,
        "value": "7"
      }
    ]
    "###);

    assert_eq!(report.selections.len(), 3);
    assert_eq!(report.selections[2].clear, ClearMode::Current);
    assert_eq!(report.ranges, vec![CellRange { r1: 5, c1: 1, r2: 7, c2: 3 }]);
    assert_eq!(report.press, "idle");
    assert_eq!(report.cursor, "default");
    assert!(!report.editor.visible);
    assert!(!report.tooltip.visible);
    assert_eq!(report.pending_timers, 0);
}

#[test]
fn test_replay_autoscroll_ticks() {
    let script = ReplayScript::from_json(
        r#"{
            "grid": { "rows": 100, "columns": 20, "viewport_width": 400, "viewport_height": 300 },
            "events": [
                { "type": "down", "x": 224, "y": 110 },
                { "type": "move", "x": 224, "y": 310 },
                { "type": "tick" },
                { "type": "tick" }
            ]
        }"#,
    )
    .unwrap();
    let report = script.run(None);

    assert_eq!(report.ranges, vec![CellRange { r1: 3, c1: 2, r2: 5, c2: 2 }]);
    assert_eq!(report.press, "select");
    assert_eq!(report.cursor, "default");
    assert_eq!(report.pending_timers, 1);
}

#[test]
fn test_replay_resize_reports_cursor() {
    let script = ReplayScript::from_json(
        r#"{
            "grid": { "rows": 10, "columns": 5, "viewport_width": 400, "viewport_height": 300 },
            "events": [
                { "type": "down", "x": 254, "y": 30 },
                { "type": "move", "x": 264, "y": 30 }
            ]
        }"#,
    )
    .unwrap();
    let report = script.run(None);

    assert_eq!(report.press, "column-resize");
    assert_eq!(report.cursor, "ew-resize");
    assert_eq!(report.resizes.len(), 1);
    assert_eq!(report.resizes[0].size, 74.0);
}

#[test]
fn test_settings_argument_overrides_script() {
    let json = r#"{
        "grid": { "rows": 10, "columns": 5, "viewport_width": 400, "viewport_height": 300 },
        "settings": { "editor_inset": 0.0 },
        "events": [
            { "type": "down", "x": 224, "y": 110 },
            { "type": "up", "x": 224, "y": 110 },
            { "type": "down", "x": 224, "y": 110 },
            { "type": "up", "x": 224, "y": 110 }
        ]
    }"#;
    let script = ReplayScript::from_json(json).unwrap();
    assert_eq!(script.settings.as_ref().map(|s| s.editor_inset), Some(0.0));

    let report = script.run(None);
    assert!(report.editor.visible);
    assert_eq!(report.editor.target.map(|t| (t.row, t.column)), Some((3, 2)));

    // A label row outside the header turns the label press into a selection
    let mut settings = InteractionSettings::default();
    settings.label_row = 9;
    let header = ReplayScript::from_json(
        r#"{
            "grid": { "rows": 10, "columns": 5, "viewport_width": 400, "viewport_height": 300 },
            "events": [{ "type": "down", "x": 224, "y": 30 }]
        }"#,
    )
    .unwrap();
    assert_eq!(header.run(None).press, "click");
    assert_eq!(header.run(Some(settings)).press, "select");
}

#[test]
fn test_replay_wheel_follows_hovered_position() {
    let script = ReplayScript::from_json(
        r#"{
            "grid": { "rows": 100, "columns": 20, "viewport_width": 400, "viewport_height": 300 },
            "cells": [
                { "row": 3, "column": 2, "tooltip": "three" },
                { "row": 5, "column": 2, "tooltip": "five" }
            ],
            "events": [
                { "type": "move", "x": 224, "y": 110 },
                { "type": "wheel", "dy": 40 }
            ]
        }"#,
    )
    .unwrap();
    let report = script.run(None);

    assert_eq!(report.scroll_y, 40.0);
    assert!(report.tooltip.visible);
    assert_eq!(report.tooltip.content.as_deref(), Some("five"));
}

#[test]
fn test_unknown_event_type_is_rejected() {
    let result = ReplayScript::from_json(
        r#"{
            "grid": { "rows": 1, "columns": 1, "viewport_width": 100, "viewport_height": 100 },
            "events": [{ "type": "double-click", "x": 1, "y": 1 }]
        }"#,
    );
    assert!(result.is_err());
}
