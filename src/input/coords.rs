//! Coordinate helpers for pointer handling.
//!
//! Hit tests report the pointer offset inside the hit cell; these helpers
//! turn that back into client rectangles and clamp virtual positions to the
//! body.

use crate::types::{HitTest, Rect};
use gpui::{Pixels, Point, point, px};

/// Split a pixel point into raw `f32` components.
#[inline]
pub fn xy(position: Point<Pixels>) -> (f32, f32) {
    (f32::from(position.x), f32::from(position.y))
}

#[inline]
pub fn client_point(x: f32, y: f32) -> Point<Pixels> {
    point(px(x), px(y))
}

/// Clamp a virtual body offset to `[0, extent - 1]`.
#[inline]
pub fn clamp_to_body(offset: f32, extent: f32) -> f32 {
    offset.min((extent - 1.0).max(0.0)).max(0.0)
}

/// Client rectangle of the cell `hit` resolved `position` to.
#[inline]
pub fn cell_client_rect(position: Point<Pixels>, hit: &HitTest) -> Rect {
    let (x, y) = xy(position);
    Rect::new(x - hit.x, y - hit.y, hit.width, hit.height)
}
