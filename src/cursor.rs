//! Cursor hints for the grid viewport.
//!
//! The hover cursor follows the resize handle under the pointer. While a
//! press is live it pins its own cursor through a [`CursorOverride`] guard;
//! dropping the guard releases the override.

use crate::types::ResizeHandle;
use gpui::CursorStyle;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Cursor shown over a resize handle (or the default cursor).
pub fn cursor_for_handle(handle: ResizeHandle) -> CursorStyle {
    match handle {
        ResizeHandle::Top | ResizeHandle::Bottom => CursorStyle::ResizeUpDown,
        ResizeHandle::Left | ResizeHandle::Right => CursorStyle::ResizeLeftRight,
        ResizeHandle::None => CursorStyle::Arrow,
    }
}

/// Stable name for a cursor, used in reports and logs.
pub fn cursor_name(style: CursorStyle) -> &'static str {
    match style {
        CursorStyle::ResizeUpDown => "ns-resize",
        CursorStyle::ResizeLeftRight => "ew-resize",
        CursorStyle::Arrow => "default",
        _ => "other",
    }
}

#[derive(Debug, Default)]
struct OverrideStack {
    next_id: u64,
    entries: Vec<(u64, CursorStyle)>,
}

/// Shared stack of cursor overrides. The most recent live override wins.
#[derive(Clone, Default)]
pub struct CursorOverrides {
    inner: Arc<Mutex<OverrideStack>>,
}

impl CursorOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an override; it stays active until the returned guard is dropped.
    #[must_use = "the override is released when the guard is dropped"]
    pub fn push(&self, style: CursorStyle) -> CursorOverride {
        let mut stack = self.inner.lock();
        let id = stack.next_id;
        stack.next_id += 1;
        stack.entries.push((id, style));
        CursorOverride {
            id,
            style,
            owner: Arc::clone(&self.inner),
        }
    }

    /// The topmost live override, if any.
    pub fn current(&self) -> Option<CursorStyle> {
        self.inner.lock().entries.last().map(|(_, style)| *style)
    }

    pub fn active_count(&self) -> usize {
        self.inner.lock().entries.len()
    }
}

impl fmt::Debug for CursorOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorOverrides")
            .field("active", &self.active_count())
            .finish()
    }
}

/// RAII handle for one pushed cursor override.
pub struct CursorOverride {
    id: u64,
    style: CursorStyle,
    owner: Arc<Mutex<OverrideStack>>,
}

impl CursorOverride {
    pub fn style(&self) -> CursorStyle {
        self.style
    }
}

impl Drop for CursorOverride {
    fn drop(&mut self) {
        let mut stack = self.owner.lock();
        stack.entries.retain(|(id, _)| *id != self.id);
    }
}

impl fmt::Debug for CursorOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorOverride")
            .field("id", &self.id)
            .field("style", &self.style)
            .finish()
    }
}
