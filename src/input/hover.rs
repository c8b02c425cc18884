//! Hover tooltip, hovered filter bins, wheel scrolling and pointer leave.

use crate::controller::{GridPointerController, HoverState};
use crate::grid::GridContext;
use crate::types::{BinHit, CellConfig, HitTest, Region};
use super::coords::{cell_client_rect, xy};
use super::events::WheelInput;
use gpui::{CursorStyle, Pixels, Point};
use tracing::warn;

impl GridPointerController {
    /// Hover with no press live: filter-row bins, then body tooltips.
    pub(crate) fn hover_at(
        &mut self,
        ctx: &mut GridContext<'_>,
        hit: &HitTest,
        position: Point<Pixels>,
    ) {
        if hit.region == Region::ColumnHeader && hit.row == self.settings.filter_row {
            let bin = ctx
                .grid
                .filter_bin_at(hit)
                .map(|bin| BinHit { column: hit.column, bin });
            self.report_hovered_bin(ctx, bin);
            self.clear_hover();
            return;
        }
        self.report_hovered_bin(ctx, None);

        if hit.region != Region::Body {
            self.clear_hover();
            return;
        }
        self.refresh_tooltip(ctx, hit, position);
    }

    /// Snapshot the hovered body cell and show its tooltip, if it has one.
    fn refresh_tooltip(
        &mut self,
        ctx: &mut GridContext<'_>,
        hit: &HitTest,
        position: Point<Pixels>,
    ) {
        let cell = CellConfig {
            region: hit.region,
            row: hit.row,
            column: hit.column,
            bounds: cell_client_rect(position, hit),
            metadata: ctx.data.metadata(hit.region, hit.row, hit.column),
            value: ctx.data.data(hit.region, hit.row, hit.column),
        };

        let content = match &self.formatter {
            Some(formatter) => match formatter.format(&cell) {
                Ok(content) => content,
                Err(e) => {
                    warn!(
                        row = cell.row,
                        column = cell.column,
                        "Tooltip formatter failed: {:#}",
                        e
                    );
                    String::new()
                }
            },
            None => ctx
                .data
                .tooltip(cell.region, cell.row, cell.column)
                .unwrap_or_default(),
        };

        if content.is_empty() {
            self.clear_hover();
            return;
        }

        let viewport = ctx.grid.viewport_bounds();
        self.tooltip
            .show(content, xy(position), viewport, &self.settings.tooltip);
        self.hover = Some(HoverState {
            cell,
            pointer: position,
        });
    }

    /// Report the filter bin under the pointer, only when it changes.
    pub(crate) fn report_hovered_bin(&mut self, ctx: &mut GridContext<'_>, next: Option<BinHit>) {
        if self.hovered_bin == next {
            return;
        }
        if let Some(previous) = self.hovered_bin {
            if next.map(|hit| hit.column) != Some(previous.column) {
                ctx.data.set_hovered_bin(previous.column, None);
            }
        }
        if let Some(hit) = next {
            ctx.data.set_hovered_bin(hit.column, Some(hit.bin));
        }
        self.hovered_bin = next;
    }

    /// Wheel scroll. Ignored during a press; a live hover is re-resolved at
    /// the same client position against the new scroll offset.
    pub fn wheel(&mut self, ctx: &mut GridContext<'_>, input: &WheelInput) {
        if self.disposed || !self.press.is_idle() {
            return;
        }

        ctx.grid.scroll_by(input.dx, input.dy);

        let Some(pointer) = self.hover.as_ref().map(|hover| hover.pointer) else {
            return;
        };
        let hit = ctx.grid.hit_test(pointer);
        if hit.region == Region::Body {
            self.refresh_tooltip(ctx, &hit, pointer);
        } else {
            self.clear_hover();
        }
    }

    /// The pointer left the grid.
    pub fn pointer_leave(&mut self, ctx: &mut GridContext<'_>) {
        if self.disposed {
            return;
        }
        self.report_hovered_bin(ctx, None);
        self.clear_hover();
        self.viewport_cursor = CursorStyle::Arrow;
    }
}
