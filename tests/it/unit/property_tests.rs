//! Property-based tests for the pointer policies.
//!
//! 1. **Handle precedence** - header edge classification matches a direct
//!    reading of the left, right, top, bottom order.
//! 2. **Timeout ramp** - autoscroll intervals stay within the configured
//!    bounds and never grow as the pointer moves further out.
//! 3. **Anchor stability** - a drag never moves the press origin.
//! 4. **Cursor overrides** - random pointer sequences never hold more than
//!    one override, and none once released.

use crate::helpers::default_session;
use gridpointer::input::{compute_timeout, drag_range, resize_handle};
use gridpointer::settings::{AutoscrollSettings, InteractionSettings};
use gridpointer::types::{HitTest, Region, ResizeHandle, SelectionMode};
use proptest::prelude::*;
use std::time::Duration;

fn header_region() -> impl Strategy<Value = Region> {
    prop_oneof![
        Just(Region::RowHeader),
        Just(Region::ColumnHeader),
        Just(Region::CornerHeader),
    ]
}

fn expected_handle(hit: &HitTest, leading: f32, trailing: f32) -> ResizeHandle {
    if hit.x <= leading && hit.column > 0 {
        return ResizeHandle::Left;
    }
    if hit.width - hit.x <= trailing {
        return ResizeHandle::Right;
    }
    if hit.y <= leading && hit.row > 0 {
        return ResizeHandle::Top;
    }
    if hit.height - hit.y <= trailing {
        return ResizeHandle::Bottom;
    }
    ResizeHandle::None
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Down(f32, f32),
    Move(f32, f32),
    Up(f32, f32),
}

fn step() -> impl Strategy<Value = Step> {
    let x = 0.0f32..450.0;
    let y = 0.0f32..350.0;
    prop_oneof![
        (x.clone(), y.clone()).prop_map(|(x, y)| Step::Down(x, y)),
        (x.clone(), y.clone()).prop_map(|(x, y)| Step::Move(x, y)),
        (x, y).prop_map(|(x, y)| Step::Up(x, y)),
    ]
}

proptest! {
    #[test]
    fn handle_follows_edge_precedence(
        region in header_region(),
        row in 0usize..4,
        column in 0usize..4,
        x in 0.0f32..64.0,
        y in 0.0f32..20.0,
    ) {
        let settings = InteractionSettings::default();
        let hit = HitTest { region, row, column, x, y, width: 64.0, height: 20.0 };
        let margins = if region == Region::ColumnHeader {
            settings.column_header_handles
        } else {
            settings.header_handles
        };
        prop_assert_eq!(
            resize_handle(&hit, &settings),
            expected_handle(&hit, margins.leading, margins.trailing)
        );
    }

    #[test]
    fn body_never_has_handles(
        x in 0.0f32..64.0,
        y in 0.0f32..20.0,
        row in 0usize..10,
        column in 0usize..10,
    ) {
        let hit = HitTest { region: Region::Body, row, column, x, y, width: 64.0, height: 20.0 };
        prop_assert_eq!(resize_handle(&hit, &InteractionSettings::default()), ResizeHandle::None);
    }

    #[test]
    fn timeout_ramp_is_bounded_and_monotonic(a in 0.0f32..400.0, b in 0.0f32..400.0) {
        let settings = AutoscrollSettings::default();
        let (near, far) = if a <= b { (a, b) } else { (b, a) };
        let near_timeout = compute_timeout(&settings, near);
        let far_timeout = compute_timeout(&settings, far);
        prop_assert!(far_timeout <= near_timeout);
        prop_assert!(near_timeout <= Duration::from_millis(125));
        prop_assert!(far_timeout >= Duration::from_millis(5));
    }

    #[test]
    fn drag_keeps_anchor(
        anchor in (0usize..100, 0usize..20),
        target in (0usize..100, 0usize..20),
        cursor in (0usize..100, 0usize..20),
    ) {
        let range = drag_range(Region::Body, SelectionMode::Cell, anchor, target, cursor);
        prop_assert_eq!(range.anchor(), anchor);
        prop_assert_eq!(range.far_corner(), target);
        prop_assert_eq!((range.cursor_row, range.cursor_column), cursor);
    }

    #[test]
    fn at_most_one_cursor_override(steps in prop::collection::vec(step(), 1..40)) {
        let mut session = default_session();
        for step in steps {
            match step {
                Step::Down(x, y) => session.down(x, y),
                Step::Move(x, y) => session.move_to(x, y),
                Step::Up(x, y) => session.up(x, y),
            }
            prop_assert!(session.controller().cursor_overrides().active_count() <= 1);
        }
        session.up(0.0, 0.0);
        prop_assert_eq!(session.controller().cursor_overrides().active_count(), 0);
        prop_assert!(session.controller().press().is_idle());
    }
}
