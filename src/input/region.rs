//! Resize-handle detection on header cells.

use crate::settings::{HandleMargins, InteractionSettings};
use crate::types::{HitTest, Region, ResizeHandle};

/// Resize band for `region`, or `None` for regions that never resize.
pub fn handle_margins(region: Region, settings: &InteractionSettings) -> Option<HandleMargins> {
    match region {
        Region::RowHeader | Region::CornerHeader => Some(settings.header_handles),
        Region::ColumnHeader => Some(settings.column_header_handles),
        Region::Body | Region::Void => None,
    }
}

/// Classify the pointer position of `hit` against the edges of its cell.
///
/// Precedence is left (not on the first column), right, top (not on the
/// first row), bottom. Thresholds are inclusive.
pub fn resize_handle(hit: &HitTest, settings: &InteractionSettings) -> ResizeHandle {
    let Some(margins) = handle_margins(hit.region, settings) else {
        return ResizeHandle::None;
    };

    let lw = hit.x;
    let lh = hit.y;
    let tw = hit.width - hit.x;
    let th = hit.height - hit.y;

    if lw <= margins.leading && hit.column > 0 {
        ResizeHandle::Left
    } else if tw <= margins.trailing {
        ResizeHandle::Right
    } else if lh <= margins.leading && hit.row > 0 {
        ResizeHandle::Top
    } else if th <= margins.trailing {
        ResizeHandle::Bottom
    } else {
        ResizeHandle::None
    }
}
