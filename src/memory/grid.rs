//! In-memory grid geometry: sections, viewport, scrolling and hit testing.

use super::sections::SectionList;
use crate::grid::GridView;
use crate::input::coords::{client_point, xy};
use crate::types::{HitTest, Rect, Region};
use gpui::{Pixels, Point};
use serde::{Deserialize, Serialize};

fn default_row_height() -> f32 {
    20.0
}

fn default_column_width() -> f32 {
    64.0
}

fn default_header_rows() -> usize {
    2
}

fn default_one() -> usize {
    1
}

/// Shape of a [`MemoryGrid`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub rows: usize,
    pub columns: usize,
    #[serde(default = "default_row_height")]
    pub row_height: f32,
    #[serde(default = "default_column_width")]
    pub column_width: f32,
    /// Column-header rows (filter row and label row by default)
    #[serde(default = "default_header_rows")]
    pub column_header_rows: usize,
    #[serde(default = "default_row_height")]
    pub column_header_height: f32,
    #[serde(default = "default_one")]
    pub row_header_columns: usize,
    #[serde(default = "default_column_width")]
    pub row_header_width: f32,
    /// Viewport size, headers included
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Client position of the viewport's top-left corner
    #[serde(default)]
    pub origin_x: f32,
    #[serde(default)]
    pub origin_y: f32,
    /// Number of equal-width filter bins per body column (missing = none)
    #[serde(default)]
    pub filter_bins: Vec<usize>,
}

impl GridSpec {
    pub fn new(rows: usize, columns: usize, viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            rows,
            columns,
            row_height: default_row_height(),
            column_width: default_column_width(),
            column_header_rows: default_header_rows(),
            column_header_height: default_row_height(),
            row_header_columns: default_one(),
            row_header_width: default_column_width(),
            viewport_width,
            viewport_height,
            origin_x: 0.0,
            origin_y: 0.0,
            filter_bins: Vec::new(),
        }
    }
}

/// A section resize applied to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionResize {
    pub axis: SectionAxis,
    pub region: Region,
    pub index: usize,
    pub size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionAxis {
    Row,
    Column,
}

#[derive(Debug, Clone)]
pub struct MemoryGrid {
    body_rows: SectionList,
    body_columns: SectionList,
    column_header_rows: SectionList,
    row_header_columns: SectionList,
    origin: (f32, f32),
    viewport: (f32, f32),
    scroll: (f32, f32),
    filter_bins: Vec<usize>,
    resizes: Vec<SectionResize>,
}

impl MemoryGrid {
    pub fn new(spec: &GridSpec) -> Self {
        Self {
            body_rows: SectionList::uniform(spec.rows, spec.row_height),
            body_columns: SectionList::uniform(spec.columns, spec.column_width),
            column_header_rows: SectionList::uniform(
                spec.column_header_rows,
                spec.column_header_height,
            ),
            row_header_columns: SectionList::uniform(
                spec.row_header_columns,
                spec.row_header_width,
            ),
            origin: (spec.origin_x, spec.origin_y),
            viewport: (spec.viewport_width.max(0.0), spec.viewport_height.max(0.0)),
            scroll: (0.0, 0.0),
            filter_bins: spec.filter_bins.clone(),
            resizes: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.body_rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.body_columns.len()
    }

    /// Every resize applied so far, in order.
    pub fn resizes(&self) -> &[SectionResize] {
        &self.resizes
    }

    /// Scroll to an absolute offset, clamped to the scrollable range.
    pub fn scroll_to(&mut self, x: f32, y: f32) {
        self.scroll = (
            x.min(self.max_scroll_x()).max(0.0),
            y.min(self.max_scroll_y()).max(0.0),
        );
    }

    fn page_width(&self) -> f32 {
        (self.viewport.0 - self.header_width()).max(0.0)
    }

    fn page_height(&self) -> f32 {
        (self.viewport.1 - self.header_height()).max(0.0)
    }

    fn rows_of(&self, region: Region) -> Option<&SectionList> {
        match region {
            Region::Body | Region::RowHeader => Some(&self.body_rows),
            Region::ColumnHeader | Region::CornerHeader => Some(&self.column_header_rows),
            Region::Void => None,
        }
    }

    fn columns_of(&self, region: Region) -> Option<&SectionList> {
        match region {
            Region::Body | Region::ColumnHeader => Some(&self.body_columns),
            Region::RowHeader | Region::CornerHeader => Some(&self.row_header_columns),
            Region::Void => None,
        }
    }

    /// Scroll offset that brings `[start, end)` into a page of `page` pixels.
    fn reveal(scroll: f32, start: f32, end: f32, page: f32) -> f32 {
        if start < scroll {
            start
        } else if end > scroll + page {
            end - page
        } else {
            scroll
        }
    }

    fn hit(
        region: Region,
        rows: &SectionList,
        row: usize,
        columns: &SectionList,
        column: usize,
        x: f32,
        y: f32,
    ) -> HitTest {
        HitTest {
            region,
            row,
            column,
            x: x - columns.offset_of(column),
            y: y - rows.offset_of(row),
            width: columns.size(column),
            height: rows.size(row),
        }
    }
}

impl GridView for MemoryGrid {
    fn hit_test(&self, position: Point<Pixels>) -> HitTest {
        let (lx, ly) = xy(self.client_to_local(position));
        if lx < 0.0 || ly < 0.0 || lx >= self.viewport.0 || ly >= self.viewport.1 {
            return HitTest::void();
        }
        let (hw, hh) = (self.header_width(), self.header_height());
        let vx = lx - hw + self.scroll.0;
        let vy = ly - hh + self.scroll.1;

        let (region, x, y) = match (lx < hw, ly < hh) {
            (true, true) => (Region::CornerHeader, lx, ly),
            (false, true) => (Region::ColumnHeader, vx, ly),
            (true, false) => (Region::RowHeader, lx, vy),
            (false, false) => (Region::Body, vx, vy),
        };
        let (Some(rows), Some(columns)) = (self.rows_of(region), self.columns_of(region)) else {
            return HitTest::void();
        };
        match (rows.index_at(y), columns.index_at(x)) {
            (Some(row), Some(column)) => Self::hit(region, rows, row, columns, column, x, y),
            _ => HitTest::void(),
        }
    }

    fn row_size(&self, region: Region, index: usize) -> f32 {
        self.rows_of(region).map_or(0.0, |rows| rows.size(index))
    }

    fn column_size(&self, region: Region, index: usize) -> f32 {
        self.columns_of(region).map_or(0.0, |columns| columns.size(index))
    }

    fn header_width(&self) -> f32 {
        self.row_header_columns.total()
    }

    fn header_height(&self) -> f32 {
        self.column_header_rows.total()
    }

    fn viewport_width(&self) -> f32 {
        self.viewport.0
    }

    fn viewport_height(&self) -> f32 {
        self.viewport.1
    }

    fn viewport_bounds(&self) -> Rect {
        Rect::new(self.origin.0, self.origin.1, self.viewport.0, self.viewport.1)
    }

    fn body_width(&self) -> f32 {
        self.body_columns.total()
    }

    fn body_height(&self) -> f32 {
        self.body_rows.total()
    }

    fn scroll_x(&self) -> f32 {
        self.scroll.0
    }

    fn scroll_y(&self) -> f32 {
        self.scroll.1
    }

    fn max_scroll_x(&self) -> f32 {
        (self.body_width() - self.page_width()).max(0.0)
    }

    fn max_scroll_y(&self) -> f32 {
        (self.body_height() - self.page_height()).max(0.0)
    }

    fn client_to_local(&self, position: Point<Pixels>) -> Point<Pixels> {
        let (x, y) = xy(position);
        client_point(x - self.origin.0, y - self.origin.1)
    }

    fn client_to_virtual(&self, position: Point<Pixels>) -> Point<Pixels> {
        let (lx, ly) = xy(self.client_to_local(position));
        client_point(
            lx - self.header_width() + self.scroll.0,
            ly - self.header_height() + self.scroll.1,
        )
    }

    fn row_at(&self, region: Region, offset: f32) -> Option<usize> {
        self.rows_of(region)?.index_at(offset)
    }

    fn column_at(&self, region: Region, offset: f32) -> Option<usize> {
        self.columns_of(region)?.index_at(offset)
    }

    fn resize_row(&mut self, region: Region, index: usize, size: f32) {
        let rows = match region {
            Region::Body | Region::RowHeader => &mut self.body_rows,
            Region::ColumnHeader | Region::CornerHeader => &mut self.column_header_rows,
            Region::Void => return,
        };
        if rows.resize(index, size) {
            let size = rows.size(index);
            self.resizes.push(SectionResize {
                axis: SectionAxis::Row,
                region,
                index,
                size,
            });
            let (x, y) = self.scroll;
            self.scroll_to(x, y);
        }
    }

    fn resize_column(&mut self, region: Region, index: usize, size: f32) {
        let columns = match region {
            Region::Body | Region::ColumnHeader => &mut self.body_columns,
            Region::RowHeader | Region::CornerHeader => &mut self.row_header_columns,
            Region::Void => return,
        };
        if columns.resize(index, size) {
            let size = columns.size(index);
            self.resizes.push(SectionResize {
                axis: SectionAxis::Column,
                region,
                index,
                size,
            });
            let (x, y) = self.scroll;
            self.scroll_to(x, y);
        }
    }

    fn scroll_by(&mut self, dx: f32, dy: f32) {
        let (x, y) = self.scroll;
        self.scroll_to(x + dx, y + dy);
    }

    fn scroll_to_row(&mut self, row: usize) {
        if self.body_rows.is_empty() {
            return;
        }
        let row = row.min(self.body_rows.len() - 1);
        let start = self.body_rows.offset_of(row);
        let end = start + self.body_rows.size(row);
        let y = Self::reveal(self.scroll.1, start, end, self.page_height());
        self.scroll_to(self.scroll.0, y);
    }

    fn scroll_to_column(&mut self, column: usize) {
        if self.body_columns.is_empty() {
            return;
        }
        let column = column.min(self.body_columns.len() - 1);
        let start = self.body_columns.offset_of(column);
        let end = start + self.body_columns.size(column);
        let x = Self::reveal(self.scroll.0, start, end, self.page_width());
        self.scroll_to(x, self.scroll.1);
    }

    fn scroll_to_cell(&mut self, row: usize, column: usize) {
        self.scroll_to_row(row);
        self.scroll_to_column(column);
    }

    fn filter_bin_at(&self, hit: &HitTest) -> Option<usize> {
        let bins = self.filter_bins.get(hit.column).copied().unwrap_or(0);
        if bins == 0 || hit.width <= 0.0 {
            return None;
        }
        let bin = (hit.x / (hit.width / bins as f32)).floor();
        (bin >= 0.0).then(|| (bin as usize).min(bins - 1))
    }
}
