//! Host-facing event records and adapters from gpui events.

use super::selection::PressModifiers;
use gpui::{
    MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent, Pixels, Point, ScrollWheelEvent,
    point, px,
};

/// A pointer position in client coordinates plus the held modifiers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub position: Point<Pixels>,
    pub modifiers: PressModifiers,
}

impl PointerInput {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: point(px(x), px(y)),
            modifiers: PressModifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: PressModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Adapter for a gpui mouse-down. Only the left button starts a press.
    pub fn from_mouse_down(event: &MouseDownEvent) -> Option<Self> {
        if event.button != MouseButton::Left {
            return None;
        }
        Some(Self {
            position: event.position,
            modifiers: PressModifiers::from_modifiers(&event.modifiers),
        })
    }

    pub fn from_mouse_move(event: &MouseMoveEvent) -> Self {
        Self {
            position: event.position,
            modifiers: PressModifiers::from_modifiers(&event.modifiers),
        }
    }

    pub fn from_mouse_up(event: &MouseUpEvent) -> Self {
        Self {
            position: event.position,
            modifiers: PressModifiers::from_modifiers(&event.modifiers),
        }
    }
}

/// A wheel scroll with its delta already in pixels, in grid scroll direction.
///
/// The hover is re-resolved at the last hovered position, so the wheel
/// event's own position is not kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelInput {
    pub dx: f32,
    pub dy: f32,
}

impl WheelInput {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// Adapter for a gpui wheel event; line deltas scale by `line_height`.
    pub fn from_scroll_wheel(event: &ScrollWheelEvent, line_height: Pixels) -> Self {
        let delta = event.delta.pixel_delta(line_height);
        // gpui deltas point against the scroll offset
        Self {
            dx: -f32::from(delta.x),
            dy: -f32::from(delta.y),
        }
    }
}
