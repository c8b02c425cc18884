//! Tooltip and inline-editor overlays.
//!
//! Both are single shared instances owned by the controller. They only hold
//! state; the host renders them.

use crate::settings::TooltipSettings;
use crate::types::{Rect, Region};
use serde::{Deserialize, Serialize};

/// Top-left corner for a `size` tooltip next to `pointer`, kept inside `viewport`.
///
/// The tooltip sits at pointer + offset. Past the right edge it aligns its
/// right edge with the viewport's. Past the bottom edge it moves above the
/// pointer, or, when already pushed in from the right, aligns its bottom
/// edge with the viewport's.
pub fn place_tooltip(
    pointer: (f32, f32),
    size: (f32, f32),
    viewport: Rect,
    offset: &TooltipSettings,
) -> (f32, f32) {
    let (px, py) = pointer;
    let (width, height) = size;

    let mut x = px + offset.offset_x;
    let mut y = py + offset.offset_y;

    let flipped_x = x + width > viewport.right();
    if flipped_x {
        x = viewport.right() - width;
    }
    if y + height > viewport.bottom() {
        y = if flipped_x {
            viewport.bottom() - height
        } else {
            py - offset.offset_y - height
        };
    }

    (
        x.min(viewport.right()).max(viewport.x),
        y.min(viewport.bottom()).max(viewport.y),
    )
}

#[derive(Debug, Clone, Default)]
pub struct TooltipOverlay {
    attached: bool,
    visible: bool,
    content: String,
    pointer: (f32, f32),
    size: (f32, f32),
    position: (f32, f32),
    viewport: Rect,
}

impl TooltipOverlay {
    pub fn attach(&mut self) {
        self.attached = true;
    }

    pub fn detach(&mut self) {
        self.hide();
        self.attached = false;
    }

    /// Show `content` for a pointer at `pointer` and place it in `viewport`.
    pub fn show(
        &mut self,
        content: String,
        pointer: (f32, f32),
        viewport: Rect,
        offset: &TooltipSettings,
    ) {
        if !self.attached {
            return;
        }
        self.content = content;
        self.pointer = pointer;
        self.viewport = viewport;
        self.visible = true;
        self.position = place_tooltip(pointer, self.size, viewport, offset);
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.content.clear();
    }

    /// Record the rendered size and re-place a visible tooltip.
    pub fn set_size(&mut self, width: f32, height: f32, offset: &TooltipSettings) {
        self.size = (width.max(0.0), height.max(0.0));
        if self.visible {
            self.position = place_tooltip(self.pointer, self.size, self.viewport, offset);
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn position(&self) -> (f32, f32) {
        self.position
    }

    pub fn size(&self) -> (f32, f32) {
        self.size
    }
}

/// Cell an open editor writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EditTarget {
    pub region: Region,
    pub row: usize,
    pub column: usize,
}

#[derive(Debug, Clone, Default)]
pub struct InlineEditor {
    attached: bool,
    visible: bool,
    bounds: Rect,
    value: String,
    target: Option<EditTarget>,
}

impl InlineEditor {
    pub fn attach(&mut self) {
        self.attached = true;
    }

    pub fn detach(&mut self) {
        self.close();
        self.attached = false;
    }

    pub fn open(&mut self, target: EditTarget, bounds: Rect, value: String) -> bool {
        if !self.attached {
            return false;
        }
        self.target = Some(target);
        self.bounds = bounds;
        self.value = value;
        self.visible = true;
        true
    }

    /// Hide the editor and forget its target, ready for the next cell.
    pub fn close(&mut self) {
        self.visible = false;
        self.target = None;
        self.value.clear();
    }

    pub fn set_value(&mut self, value: &str) {
        self.value.clear();
        self.value.push_str(value);
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn target(&self) -> Option<EditTarget> {
        self.target
    }
}
