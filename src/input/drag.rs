//! Pointer move - live resize, select drag with autoscroll arming, hover.
//!
//! ## Performance Notes
//!
//! Moves arrive at display rate. A select drag issues at most one
//! `select()` per move and none while autoscroll is armed.

use crate::controller::GridPointerController;
use crate::cursor::cursor_for_handle;
use crate::grid::{AutoscrollTicket, GridContext};
use crate::profile_scope;
use crate::types::Region;
use super::autoscroll::{AutoscrollAxis, EdgeGeometry, arm_timeout};
use super::coords::{clamp_to_body, xy};
use super::events::PointerInput;
use super::region::resize_handle;
use super::selection::drag_range;
use super::state::PressState;
use gpui::{Pixels, Point};
use tracing::trace;

impl GridPointerController {
    pub fn pointer_move(&mut self, ctx: &mut GridContext<'_>, input: &PointerInput) {
        profile_scope!("pointer_move");

        if self.disposed {
            return;
        }

        let hit = ctx.grid.hit_test(input.position);
        self.viewport_cursor = cursor_for_handle(resize_handle(&hit, &self.settings));

        let (client_x, client_y) = xy(input.position);
        match &self.press {
            PressState::Idle => self.hover_at(ctx, &hit, input.position),
            PressState::RowResize {
                region,
                index,
                original_size,
                origin_client_y,
                ..
            } => {
                let size = original_size + (client_y - origin_client_y);
                ctx.grid.resize_row(*region, *index, size);
            }
            PressState::ColumnResize {
                region,
                index,
                original_size,
                origin_client_x,
                ..
            } => {
                let size = original_size + (client_x - origin_client_x);
                ctx.grid.resize_column(*region, *index, size);
            }
            PressState::Select { .. } => self.drag_select(ctx, input.position),
            PressState::Click { .. } => {}
        }
    }

    /// Select drag: arm autoscroll near an edge, otherwise move the far corner.
    fn drag_select(&mut self, ctx: &mut GridContext<'_>, position: Point<Pixels>) {
        let (local_x, local_y) = xy(ctx.grid.client_to_local(position));
        let geometry = EdgeGeometry::from_grid(&*ctx.grid, local_x, local_y);

        let PressState::Select {
            region,
            row,
            column,
            local_x: press_x,
            local_y: press_y,
            autoscroll,
            ..
        } = &mut self.press
        else {
            return;
        };
        *press_x = local_x;
        *press_y = local_y;
        let (region, anchor) = (*region, (*row, *column));

        let Some(model) = ctx.selection.as_deref_mut() else {
            return;
        };
        let mode = model.selection_mode();
        let axis = AutoscrollAxis::for_press(region, mode);

        if let Some(timeout) = arm_timeout(axis, &geometry, &self.settings.autoscroll) {
            let was_armed = autoscroll.replace(timeout).is_some();
            if !was_armed {
                self.autoscroll_chain += 1;
                let ticket = AutoscrollTicket {
                    generation: self.press_generation,
                    chain: self.autoscroll_chain,
                };
                trace!(?ticket, timeout_ms = timeout.as_millis() as u64, "Autoscroll armed");
                ctx.scheduler.schedule(timeout, ticket);
            }
            return;
        }
        *autoscroll = None;

        let virtual_pos = ctx.grid.client_to_virtual(position);
        let (vx, vy) = xy(virtual_pos);
        let vx = clamp_to_body(vx, ctx.grid.body_width());
        let vy = clamp_to_body(vy, ctx.grid.body_height());
        let target = (
            ctx.grid.row_at(Region::Body, vy).unwrap_or(anchor.0),
            ctx.grid.column_at(Region::Body, vx).unwrap_or(anchor.1),
        );

        let cursor = (model.cursor_row(), model.cursor_column());
        let range = drag_range(region, mode, anchor, target, cursor);
        trace!(r2 = range.r2, c2 = range.c2, "Select drag");
        model.select(range);
    }
}
