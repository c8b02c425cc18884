//! Collaborator interfaces consumed by the pointer controller.
//!
//! The grid renderer, the selection model, the data model and the host's
//! timer facility are all owned by the host. The controller borrows them for
//! the duration of one event through [`GridContext`].

use crate::types::{
    BinHit, CellConfig, CellMetadata, CellRange, HitTest, Rect, Region, SelectionMode,
    SelectionRange,
};
use gpui::{Pixels, Point};
use std::time::Duration;

/// Geometry, hit testing and mutation surface of the grid widget.
pub trait GridView {
    /// Resolve a client position to a region, cell and in-cell offset.
    fn hit_test(&self, position: Point<Pixels>) -> HitTest;

    /// Height of row `index` in the section list backing `region`.
    fn row_size(&self, region: Region, index: usize) -> f32;
    /// Width of column `index` in the section list backing `region`.
    fn column_size(&self, region: Region, index: usize) -> f32;

    /// Total width of the row header.
    fn header_width(&self) -> f32;
    /// Total height of the column header.
    fn header_height(&self) -> f32;
    /// Viewport width, headers included.
    fn viewport_width(&self) -> f32;
    /// Viewport height, headers included.
    fn viewport_height(&self) -> f32;
    /// Viewport rectangle in client coordinates.
    fn viewport_bounds(&self) -> Rect;
    fn body_width(&self) -> f32;
    fn body_height(&self) -> f32;

    fn scroll_x(&self) -> f32;
    fn scroll_y(&self) -> f32;
    fn max_scroll_x(&self) -> f32;
    fn max_scroll_y(&self) -> f32;

    /// Client position to viewport-local position (headers included).
    fn client_to_local(&self, position: Point<Pixels>) -> Point<Pixels>;
    /// Client position to scrolled body coordinates.
    fn client_to_virtual(&self, position: Point<Pixels>) -> Point<Pixels>;

    /// Row containing the virtual `offset` in the section list backing `region`.
    fn row_at(&self, region: Region, offset: f32) -> Option<usize>;
    /// Column containing the virtual `offset` in the section list backing `region`.
    fn column_at(&self, region: Region, offset: f32) -> Option<usize>;

    fn resize_row(&mut self, region: Region, index: usize, size: f32);
    fn resize_column(&mut self, region: Region, index: usize, size: f32);

    fn scroll_by(&mut self, dx: f32, dy: f32);
    fn scroll_to_row(&mut self, row: usize);
    fn scroll_to_column(&mut self, column: usize);
    fn scroll_to_cell(&mut self, row: usize, column: usize);

    /// Bin hit test of the header renderer for a filter-row hit.
    fn filter_bin_at(&self, _hit: &HitTest) -> Option<usize> {
        None
    }
}

/// The grid's selection model.
pub trait SelectionModel {
    fn cursor_row(&self) -> usize;
    fn cursor_column(&self) -> usize;
    fn selection_mode(&self) -> SelectionMode;
    fn select(&mut self, range: SelectionRange);
    /// The range most recently selected, after clamping.
    fn current_selection(&self) -> Option<CellRange>;
}

/// The tabular data store behind the grid.
pub trait DataModel {
    /// Display/editable value of a cell.
    fn data(&self, region: Region, row: usize, column: usize) -> Option<String>;
    fn metadata(&self, region: Region, row: usize, column: usize) -> CellMetadata;
    /// Default tooltip text, used when no formatter is configured.
    fn tooltip(&self, region: Region, row: usize, column: usize) -> Option<String>;
    fn set_data(&mut self, region: Region, row: usize, column: usize, value: &str);
    /// Report the filter bin under the pointer for `column` (`None` clears it).
    fn set_hovered_bin(&mut self, column: usize, bin: Option<usize>);
    /// Toggle a bin filter, or clear filtering with `None`.
    fn filter_bin(&mut self, bin: Option<BinHit>, exclusive: bool);
}

/// Identifies one scheduled autoscroll timer.
///
/// A tick whose ticket no longer matches the live press is stale and does
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AutoscrollTicket {
    pub generation: u64,
    pub chain: u64,
}

/// Host timer facility driving the autoscroll loop.
///
/// The host waits `delay` and then calls
/// [`GridPointerController::autoscroll_tick`](crate::GridPointerController::autoscroll_tick)
/// with the same ticket.
pub trait AutoscrollScheduler {
    fn schedule(&mut self, delay: Duration, ticket: AutoscrollTicket);
}

/// Formats the tooltip of a hovered cell. An empty string means no tooltip.
pub trait TooltipFormatter {
    fn format(&self, cell: &CellConfig) -> anyhow::Result<String>;
}

impl<F> TooltipFormatter for F
where
    F: Fn(&CellConfig) -> anyhow::Result<String>,
{
    fn format(&self, cell: &CellConfig) -> anyhow::Result<String> {
        self(cell)
    }
}

/// Borrowed collaborators for one event.
pub struct GridContext<'a> {
    pub grid: &'a mut dyn GridView,
    /// Selection-dependent work is skipped while no model is attached.
    pub selection: Option<&'a mut dyn SelectionModel>,
    pub data: &'a mut dyn DataModel,
    pub scheduler: &'a mut dyn AutoscrollScheduler,
}

impl<'a> GridContext<'a> {
    pub fn new(
        grid: &'a mut dyn GridView,
        selection: Option<&'a mut dyn SelectionModel>,
        data: &'a mut dyn DataModel,
        scheduler: &'a mut dyn AutoscrollScheduler,
    ) -> Self {
        Self {
            grid,
            selection,
            data,
            scheduler,
        }
    }
}
