//! Press state machine - the single live pointer press.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> RowResize      (down on a top/bottom header handle)
//! Idle -> ColumnResize   (down on a left/right header handle)
//! Idle -> Select         (down on a body cell, row header or column header)
//! Idle -> Click          (down on the column label row, or on the sole selected body cell)
//!
//! Any  -> Idle           (pointer up, a new pointer down, or dispose)
//! ```
//!
//! Each variant owns the cursor override it pushed, so leaving a state
//! releases the override exactly once.

use crate::cursor::CursorOverride;
use crate::types::Region;
use std::time::Duration;

#[derive(Debug, Default)]
pub enum PressState {
    /// No press in progress
    #[default]
    Idle,

    /// Live row resize
    RowResize {
        /// Section list the row belongs to
        region: Region,
        index: usize,
        /// Row height when the press began
        original_size: f32,
        /// Client y of the press
        origin_client_y: f32,
        cursor: CursorOverride,
    },

    /// Live column resize
    ColumnResize {
        region: Region,
        index: usize,
        original_size: f32,
        origin_client_x: f32,
        cursor: CursorOverride,
    },

    /// Range selection drag
    Select {
        /// Region the press began in
        region: Region,
        /// Anchor row captured at press time
        row: usize,
        /// Anchor column captured at press time
        column: usize,
        cursor: CursorOverride,
        /// Latest pointer position, viewport-local
        local_x: f32,
        local_y: f32,
        /// Repeat interval of the armed autoscroll, `None` when disarmed
        autoscroll: Option<Duration>,
    },

    /// Press that only acts on a matching release
    Click {
        region: Region,
        row: usize,
        column: usize,
        cursor: CursorOverride,
    },
}

impl PressState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::RowResize { .. } | Self::ColumnResize { .. })
    }

    pub fn is_selecting(&self) -> bool {
        matches!(self, Self::Select { .. })
    }

    pub fn is_click(&self) -> bool {
        matches!(self, Self::Click { .. })
    }

    /// Short name of the variant, for logs and reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::RowResize { .. } => "row-resize",
            Self::ColumnResize { .. } => "column-resize",
            Self::Select { .. } => "select",
            Self::Click { .. } => "click",
        }
    }

    /// Repeat interval of the armed autoscroll, if selecting with one armed.
    pub fn autoscroll_timeout(&self) -> Option<Duration> {
        match self {
            Self::Select { autoscroll, .. } => *autoscroll,
            _ => None,
        }
    }

    /// Cell a select or click press began on.
    pub fn origin(&self) -> Option<(Region, usize, usize)> {
        match self {
            Self::Select {
                region,
                row,
                column,
                ..
            }
            | Self::Click {
                region,
                row,
                column,
                ..
            } => Some((*region, *row, *column)),
            _ => None,
        }
    }

    /// Reset to Idle, dropping any held cursor override.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Take the current state, leaving Idle behind.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    pub fn start_select(
        &mut self,
        region: Region,
        row: usize,
        column: usize,
        cursor: CursorOverride,
    ) {
        *self = Self::Select {
            region,
            row,
            column,
            cursor,
            local_x: 0.0,
            local_y: 0.0,
            autoscroll: None,
        };
    }

    pub fn start_click(
        &mut self,
        region: Region,
        row: usize,
        column: usize,
        cursor: CursorOverride,
    ) {
        *self = Self::Click {
            region,
            row,
            column,
            cursor,
        };
    }
}
