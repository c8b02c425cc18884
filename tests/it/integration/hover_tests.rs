//! Hover Tooltip Integration Tests

use crate::helpers::{TestGridBuilder, body_point, row_header_point};
use gridpointer::GridView;
use gridpointer::types::CellConfig;

fn tooltip_session() -> gridpointer::replay::ReplaySession {
    TestGridBuilder::new()
        .with_value(3, 2, "42")
        .with_tooltip(3, 2, "answer")
        .with_tooltip(5, 2, "five")
        .build()
}

#[test]
fn test_hover_shows_data_tooltip_next_to_pointer() {
    let mut session = tooltip_session();
    let (x, y) = body_point(3, 2);
    session.move_to(x, y);

    let tooltip = session.controller().tooltip();
    assert!(tooltip.is_visible());
    assert_eq!(tooltip.content(), "answer");
    assert_eq!(tooltip.position(), (236.0, 124.0));

    let hover = session.controller().hover().unwrap();
    assert_eq!((hover.cell.row, hover.cell.column), (3, 2));
    assert_eq!(hover.cell.value.as_deref(), Some("42"));
    assert_eq!(hover.cell.bounds.x, 192.0);
    assert_eq!(hover.cell.bounds.y, 100.0);
}

#[test]
fn test_cell_without_tooltip_shows_nothing() {
    let mut session = tooltip_session();
    let (x, y) = body_point(4, 2);
    session.move_to(x, y);
    assert!(!session.controller().tooltip().is_visible());
    assert!(session.controller().hover().is_none());
}

#[test]
fn test_formatter_replaces_data_tooltips() {
    let mut session = TestGridBuilder::new()
        .with_value(3, 2, "42")
        .with_metadata(3, 2, "unit", "ms")
        .build();
    session
        .controller_mut()
        .set_formatter(|cell: &CellConfig| -> anyhow::Result<String> {
            let value = cell.value.clone().unwrap_or_default();
            let unit = cell.metadata.get("unit").cloned().unwrap_or_default();
            Ok(format!("{value} {unit}"))
        });

    let (x, y) = body_point(3, 2);
    session.move_to(x, y);
    assert_eq!(session.controller().tooltip().content(), "42 ms");
}

#[test]
fn test_empty_formatter_result_hides_tooltip() {
    let mut session = tooltip_session();
    session
        .controller_mut()
        .set_formatter(|_: &CellConfig| -> anyhow::Result<String> { Ok(String::new()) });

    let (x, y) = body_point(3, 2);
    session.move_to(x, y);
    assert!(!session.controller().tooltip().is_visible());
    assert!(session.controller().hover().is_none());
}

#[test]
fn test_formatter_error_hides_tooltip() {
    let mut session = tooltip_session();
    session
        .controller_mut()
        .set_formatter(|_: &CellConfig| -> anyhow::Result<String> {
            Err(anyhow::anyhow!("no stats"))
        });

    let (x, y) = body_point(3, 2);
    session.move_to(x, y);
    assert!(!session.controller().tooltip().is_visible());
}

#[test]
fn test_leaving_body_clears_hover() {
    let mut session = tooltip_session();
    let (x, y) = body_point(3, 2);
    session.move_to(x, y);
    assert!(session.controller().tooltip().is_visible());

    let (x, y) = row_header_point(3);
    session.move_to(x, y);
    assert!(!session.controller().tooltip().is_visible());
    assert!(session.controller().hover().is_none());
}

#[test]
fn test_press_hides_tooltip() {
    let mut session = tooltip_session();
    let (x, y) = body_point(3, 2);
    session.move_to(x, y);
    session.down(x, y);
    assert!(!session.controller().tooltip().is_visible());

    // No hover while the press is live
    session.move_to(x, y);
    assert!(!session.controller().tooltip().is_visible());
}

#[test]
fn test_pointer_leave_clears_everything() {
    let mut session = tooltip_session();
    let (x, y) = body_point(3, 2);
    session.move_to(x, y);
    session.leave();
    assert!(!session.controller().tooltip().is_visible());
    assert!(session.controller().hover().is_none());
}

#[test]
fn test_tooltip_kept_inside_viewport_once_measured() {
    let mut session = TestGridBuilder::new().with_tooltip(3, 5, "edge").build();
    // Column 5 spans x 384..448, clipped by the 400px viewport
    session.move_to(390.0, 110.0);
    assert_eq!(session.controller().tooltip().position(), (400.0, 124.0));

    session.measure(80.0, 20.0);
    assert_eq!(session.controller().tooltip().position(), (320.0, 124.0));
}

#[test]
fn test_tooltip_flips_above_pointer_near_bottom() {
    let mut session = TestGridBuilder::new().with_tooltip(12, 1, "low").build();
    session.measure(50.0, 30.0);
    // Row 12 spans y 280..300
    session.move_to(160.0, 290.0);
    assert_eq!(session.controller().tooltip().position(), (172.0, 246.0));
}

#[test]
fn test_wheel_reresolves_hovered_cell() {
    let mut session = tooltip_session();
    let (x, y) = body_point(3, 2);
    session.move_to(x, y);

    session.wheel(0.0, 40.0);
    assert_eq!(session.grid().scroll_y(), 40.0);
    let hover = session.controller().hover().unwrap();
    assert_eq!(hover.cell.row, 5);
    assert_eq!(session.controller().tooltip().content(), "five");

    session.wheel(0.0, 20.0);
    assert!(!session.controller().tooltip().is_visible());
    assert!(session.controller().hover().is_none());
}

#[test]
fn test_wheel_ignored_during_press() {
    let mut session = tooltip_session();
    let (x, y) = body_point(3, 2);
    session.down(x, y);
    session.wheel(0.0, 40.0);
    assert_eq!(session.grid().scroll_y(), 0.0);
}
