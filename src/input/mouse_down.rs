//! Pointer down - resize, select and click press initiation, filter bins.
//!
//! A press always supersedes hover: the tooltip is hidden and the previous
//! press is released before anything else happens.

use crate::controller::GridPointerController;
use crate::cursor::cursor_for_handle;
use crate::grid::GridContext;
use crate::profile_scope;
use crate::types::{BinHit, HitTest, Region, ResizeHandle};
use super::coords::xy;
use super::events::PointerInput;
use super::region::resize_handle;
use super::selection::{is_sole_cursor_cell, press_range};
use super::state::PressState;
use gpui::CursorStyle;
use tracing::debug;

impl GridPointerController {
    pub fn pointer_down(&mut self, ctx: &mut GridContext<'_>, input: &PointerInput) {
        profile_scope!("pointer_down");

        if self.disposed {
            return;
        }

        self.clear_hover();
        self.release_press();

        let hit = ctx.grid.hit_test(input.position);
        match hit.region {
            Region::Void => {}
            Region::Body => self.begin_body_press(ctx, &hit, input),
            Region::RowHeader | Region::ColumnHeader | Region::CornerHeader => {
                self.begin_header_press(ctx, &hit, input)
            }
        }
    }

    fn begin_body_press(
        &mut self,
        ctx: &mut GridContext<'_>,
        hit: &HitTest,
        input: &PointerInput,
    ) {
        let Some(model) = ctx.selection.as_deref_mut() else {
            return;
        };
        let modifiers = input.modifiers;

        if !modifiers.shift
            && !modifiers.accel
            && is_sole_cursor_cell(&*model, hit.row, hit.column)
        {
            let generation = self.next_generation();
            let cursor = self.cursors.push(CursorStyle::Arrow);
            self.press.start_click(Region::Body, hit.row, hit.column, cursor);
            debug!(
                kind = "click",
                region = ?Region::Body,
                row = hit.row,
                column = hit.column,
                generation,
                "Press started"
            );
            return;
        }

        let cursor = (model.cursor_row(), model.cursor_column());
        let Some(range) = press_range(Region::Body, hit.row, hit.column, modifiers, cursor) else {
            return;
        };
        model.select(range);
        self.start_select(Region::Body, range.r1, range.c1);
    }

    fn begin_header_press(
        &mut self,
        ctx: &mut GridContext<'_>,
        hit: &HitTest,
        input: &PointerInput,
    ) {
        let handle = resize_handle(hit, &self.settings);
        if handle != ResizeHandle::None {
            self.begin_resize(ctx, hit, handle, input);
            return;
        }

        if hit.region == Region::ColumnHeader && hit.row == self.settings.filter_row {
            self.toggle_filter_bin(ctx, hit, input);
            return;
        }

        if hit.region == Region::ColumnHeader && hit.row == self.settings.label_row {
            let generation = self.next_generation();
            let cursor = self.cursors.push(CursorStyle::Arrow);
            self.press.start_click(Region::ColumnHeader, hit.row, hit.column, cursor);
            debug!(
                kind = "click",
                region = ?hit.region,
                row = hit.row,
                column = hit.column,
                generation,
                "Press started"
            );
            return;
        }

        let Some(model) = ctx.selection.as_deref_mut() else {
            return;
        };
        let cursor = (model.cursor_row(), model.cursor_column());
        let Some(range) = press_range(hit.region, hit.row, hit.column, input.modifiers, cursor)
        else {
            return;
        };
        model.select(range);
        self.start_select(hit.region, range.r1, range.c1);
    }

    fn start_select(&mut self, region: Region, row: usize, column: usize) {
        let generation = self.next_generation();
        let cursor = self.cursors.push(CursorStyle::Arrow);
        self.press.start_select(region, row, column, cursor);
        debug!(kind = "select", region = ?region, row, column, generation, "Press started");
    }

    /// Start a live resize of the section behind `handle`.
    ///
    /// Column-header handles resize body columns, row-header handles body
    /// rows; everything else resizes the header's own sections. Left and top
    /// handles belong to the previous section.
    fn begin_resize(
        &mut self,
        ctx: &mut GridContext<'_>,
        hit: &HitTest,
        handle: ResizeHandle,
        input: &PointerInput,
    ) {
        let (client_x, client_y) = xy(input.position);
        let generation = self.next_generation();
        let cursor = self.cursors.push(cursor_for_handle(handle));

        if handle.is_horizontal() {
            let region = if hit.region == Region::ColumnHeader {
                Region::Body
            } else {
                Region::RowHeader
            };
            let index = if handle == ResizeHandle::Left {
                hit.column.saturating_sub(1)
            } else {
                hit.column
            };
            let original_size = ctx.grid.column_size(region, index);
            self.press = PressState::ColumnResize {
                region,
                index,
                original_size,
                origin_client_x: client_x,
                cursor,
            };
            debug!(
                kind = "column-resize",
                region = ?region,
                index,
                original_size,
                generation,
                "Press started"
            );
        } else {
            let region = if hit.region == Region::RowHeader {
                Region::Body
            } else {
                Region::ColumnHeader
            };
            let index = if handle == ResizeHandle::Top {
                hit.row.saturating_sub(1)
            } else {
                hit.row
            };
            let original_size = ctx.grid.row_size(region, index);
            self.press = PressState::RowResize {
                region,
                index,
                original_size,
                origin_client_y: client_y,
                cursor,
            };
            debug!(
                kind = "row-resize",
                region = ?region,
                index,
                original_size,
                generation,
                "Press started"
            );
        }
    }

    /// Filter-row press: toggle the bin under the pointer, or clear filtering.
    fn toggle_filter_bin(
        &mut self,
        ctx: &mut GridContext<'_>,
        hit: &HitTest,
        input: &PointerInput,
    ) {
        match ctx.grid.filter_bin_at(hit) {
            Some(bin) => {
                let exclusive = input.modifiers.shift;
                debug!(column = hit.column, bin, exclusive, "Toggling filter bin");
                ctx.data.filter_bin(Some(BinHit { column: hit.column, bin }), exclusive);
            }
            None => {
                debug!(column = hit.column, "Clearing filter");
                ctx.data.filter_bin(None, false);
            }
        }
    }
}
