//! Autoscroll loop - timer-driven extension of a select drag near an edge.
//!
//! A select drag that leaves the scrollable body arms the loop with a repeat
//! interval scaled by how far past the edge the pointer is. Each tick grows
//! the current selection by one section toward the pointer, scrolls the new
//! far corner into view and asks the scheduler for the next tick.

use crate::controller::GridPointerController;
use crate::grid::{AutoscrollTicket, GridContext, GridView};
use crate::profile_scope;
use crate::settings::AutoscrollSettings;
use crate::types::{ClearMode, Region, SelectionMode, SelectionRange};
use super::state::PressState;
use std::time::Duration;
use tracing::trace;

/// Axes an autoscroll may move along, fixed by the press region and mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoscrollAxis {
    Vertical,
    Horizontal,
    Both,
}

impl AutoscrollAxis {
    pub fn for_press(region: Region, mode: SelectionMode) -> Self {
        if region == Region::RowHeader || mode == SelectionMode::Row {
            Self::Vertical
        } else if region == Region::ColumnHeader || mode == SelectionMode::Column {
            Self::Horizontal
        } else {
            Self::Both
        }
    }

    fn vertical(self) -> bool {
        matches!(self, Self::Vertical | Self::Both)
    }

    fn horizontal(self) -> bool {
        matches!(self, Self::Horizontal | Self::Both)
    }
}

/// Viewport-local pointer position with the scroll state it is judged against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeGeometry {
    pub local_x: f32,
    pub local_y: f32,
    pub header_width: f32,
    pub header_height: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub scroll_x: f32,
    pub scroll_y: f32,
    pub max_scroll_x: f32,
    pub max_scroll_y: f32,
}

impl EdgeGeometry {
    pub fn from_grid(grid: &dyn GridView, local_x: f32, local_y: f32) -> Self {
        Self {
            local_x,
            local_y,
            header_width: grid.header_width(),
            header_height: grid.header_height(),
            viewport_width: grid.viewport_width(),
            viewport_height: grid.viewport_height(),
            scroll_x: grid.scroll_x(),
            scroll_y: grid.scroll_y(),
            max_scroll_x: grid.max_scroll_x(),
            max_scroll_y: grid.max_scroll_y(),
        }
    }
}

/// Repeat interval for a pointer `distance` pixels past the edge threshold.
pub fn compute_timeout(settings: &AutoscrollSettings, distance: f32) -> Duration {
    settings.timeout_for(distance)
}

/// Interval to arm the loop with, or `None` when the pointer is not in a
/// scrollable edge zone. With both axes the horizontal one is checked first.
pub fn arm_timeout(
    axis: AutoscrollAxis,
    geometry: &EdgeGeometry,
    settings: &AutoscrollSettings,
) -> Option<Duration> {
    let g = geometry;
    let vertical = || {
        if g.local_y < g.header_height && g.scroll_y > 0.0 {
            Some(compute_timeout(settings, g.header_height - g.local_y))
        } else if g.local_y >= g.viewport_height && g.scroll_y < g.max_scroll_y {
            Some(compute_timeout(settings, g.local_y - g.viewport_height))
        } else {
            None
        }
    };
    let horizontal = || {
        if g.local_x < g.header_width && g.scroll_x > 0.0 {
            Some(compute_timeout(settings, g.header_width - g.local_x))
        } else if g.local_x >= g.viewport_width && g.scroll_x < g.max_scroll_x {
            Some(compute_timeout(settings, g.local_x - g.viewport_width))
        } else {
            None
        }
    };
    match axis {
        AutoscrollAxis::Vertical => vertical(),
        AutoscrollAxis::Horizontal => horizontal(),
        AutoscrollAxis::Both => horizontal().or_else(vertical),
    }
}

/// Move `index` one section toward a pointer at `local` (before the header
/// edge, past the far edge, or inside).
pub fn step_toward(index: usize, local: f32, header: f32, extent: f32) -> usize {
    if local <= header {
        index.saturating_sub(1)
    } else if local >= extent {
        index.saturating_add(1)
    } else {
        index
    }
}

impl GridPointerController {
    /// Timer callback of the autoscroll loop.
    ///
    /// Does nothing when `ticket` is stale: the press ended, was replaced, or
    /// its autoscroll was disarmed since the timer was scheduled.
    pub fn autoscroll_tick(&mut self, ctx: &mut GridContext<'_>, ticket: AutoscrollTicket) {
        profile_scope!("autoscroll_tick");

        if self.disposed || !self.is_live_ticket(ticket) {
            trace!(?ticket, "Ignoring stale autoscroll tick");
            return;
        }
        let PressState::Select {
            region,
            local_x,
            local_y,
            autoscroll: Some(timeout),
            ..
        } = self.press
        else {
            return;
        };
        let Some(model) = ctx.selection.as_deref_mut() else {
            return;
        };
        let Some(current) = model.current_selection() else {
            return;
        };

        let axis = AutoscrollAxis::for_press(region, model.selection_mode());
        let grid = &mut *ctx.grid;
        let mut r2 = current.r2;
        let mut c2 = current.c2;
        if axis.vertical() {
            r2 = step_toward(r2, local_y, grid.header_height(), grid.viewport_height());
        }
        if axis.horizontal() {
            c2 = step_toward(c2, local_x, grid.header_width(), grid.viewport_width());
        }

        let (cursor_row, cursor_column) = (model.cursor_row(), model.cursor_column());
        model.select(SelectionRange {
            r1: current.r1,
            c1: current.c1,
            r2,
            c2,
            cursor_row,
            cursor_column,
            clear: ClearMode::Current,
        });

        if let Some(grown) = model.current_selection() {
            match axis {
                AutoscrollAxis::Vertical => grid.scroll_to_row(grown.r2),
                AutoscrollAxis::Horizontal => grid.scroll_to_column(grown.c2),
                AutoscrollAxis::Both => grid.scroll_to_cell(grown.r2, grown.c2),
            }
            trace!(
                r2 = grown.r2,
                c2 = grown.c2,
                timeout_ms = timeout.as_millis() as u64,
                "Autoscroll step"
            );
        }

        ctx.scheduler.schedule(timeout, ticket);
    }

    pub(crate) fn is_live_ticket(&self, ticket: AutoscrollTicket) -> bool {
        ticket.generation == self.press_generation
            && ticket.chain == self.autoscroll_chain
            && self.press.autoscroll_timeout().is_some()
    }
}
