//! Filter Row Integration Tests

use crate::helpers::{TestGridBuilder, body_point, column_header_point};
use gridpointer::PressModifiers;
use gridpointer::memory::{FilterRequest, HoveredBin};
use gridpointer::types::BinHit;

/// Four 16px bins in every column's filter row.
fn binned_session() -> gridpointer::replay::ReplaySession {
    TestGridBuilder::new().with_filter_bins(vec![4; 20]).build()
}

#[test]
fn test_filter_row_press_toggles_bin() {
    let mut session = binned_session();
    // 33px into column 0
    session.down(97.0, 5.0);
    session.up(97.0, 5.0);
    assert_eq!(
        session.data().filters(),
        &[FilterRequest {
            bin: Some(BinHit { column: 0, bin: 2 }),
            exclusive: false,
        }]
    );
    assert!(session.controller().press().is_idle());
    assert!(session.selection().requests().is_empty());
}

#[test]
fn test_shift_press_filters_exclusively() {
    let mut session = binned_session();
    session.down_with(97.0, 5.0, PressModifiers { shift: true, accel: false });
    assert!(session.data().filters()[0].exclusive);
}

#[test]
fn test_press_without_bins_clears_filter() {
    let mut session = TestGridBuilder::new().build();
    let (x, y) = column_header_point(0, 4);
    session.down(x, y);
    assert_eq!(
        session.data().filters(),
        &[FilterRequest {
            bin: None,
            exclusive: false,
        }]
    );
}

#[test]
fn test_hovered_bin_reported_on_change_only() {
    let mut session = binned_session();
    session.move_to(97.0, 5.0);
    session.move_to(98.0, 5.0);
    assert_eq!(session.data().hovered_bins(), &[HoveredBin { column: 0, bin: Some(2) }]);

    // Same column, next bin
    session.move_to(120.0, 5.0);
    // Column 1, first bin
    session.move_to(138.0, 5.0);
    assert_eq!(
        session.data().hovered_bins(),
        &[
            HoveredBin { column: 0, bin: Some(2) },
            HoveredBin { column: 0, bin: Some(3) },
            HoveredBin { column: 0, bin: None },
            HoveredBin { column: 1, bin: Some(0) },
        ]
    );

    let (x, y) = body_point(3, 1);
    session.move_to(x, y);
    assert_eq!(session.data().hovered_bins().last(), Some(&HoveredBin { column: 1, bin: None }));
    assert_eq!(session.data().hovered_bins().len(), 5);
}

#[test]
fn test_leave_resets_hovered_bin() {
    let mut session = binned_session();
    session.move_to(97.0, 5.0);
    session.leave();
    assert_eq!(
        session.data().hovered_bins(),
        &[HoveredBin { column: 0, bin: Some(2) }, HoveredBin { column: 0, bin: None }]
    );
    session.leave();
    assert_eq!(session.data().hovered_bins().len(), 2);
}

#[test]
fn test_dispose_resets_hovered_bin() {
    let mut session = binned_session();
    session.move_to(97.0, 5.0);
    session.dispose();
    assert_eq!(
        session.data().hovered_bins(),
        &[HoveredBin { column: 0, bin: Some(2) }, HoveredBin { column: 0, bin: None }]
    );

    // Later events are ignored
    session.move_to(97.0, 5.0);
    assert_eq!(session.data().hovered_bins().len(), 2);
}
