//! Shared value types: hit regions, hit-test results, selection ranges and
//! cell snapshots.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Index standing in for "to the end of the axis" in a selection range.
///
/// Selection models clamp it to the last row or column.
pub const UNBOUNDED: usize = usize::MAX;

/// Region of the grid a pointer position resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    Body,
    RowHeader,
    ColumnHeader,
    CornerHeader,
    /// Outside any cell (past the last row/column or outside the viewport)
    Void,
}

impl Region {
    pub fn is_header(self) -> bool {
        matches!(
            self,
            Region::RowHeader | Region::ColumnHeader | Region::CornerHeader
        )
    }
}

/// Result of resolving a client position against the grid.
///
/// `row`/`column` index the section list of the region: for the column
/// header `row` is the header row, for the row header `column` is the header
/// column. `x`/`y` are the pointer offset inside the hit cell and
/// `width`/`height` its rendered extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitTest {
    pub region: Region,
    pub row: usize,
    pub column: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl HitTest {
    pub fn void() -> Self {
        Self {
            region: Region::Void,
            row: 0,
            column: 0,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        }
    }

    /// Whether two hits land on the same cell of the same region.
    pub fn same_cell(&self, region: Region, row: usize, column: usize) -> bool {
        self.region == region && self.row == row && self.column == column
    }
}

/// Edge of a header cell the pointer is close enough to drag.
///
/// Derived from hit-test geometry on every event, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    Top,
    Left,
    Right,
    Bottom,
    None,
}

impl ResizeHandle {
    pub fn is_horizontal(self) -> bool {
        matches!(self, ResizeHandle::Left | ResizeHandle::Right)
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, ResizeHandle::Top | ResizeHandle::Bottom)
    }
}

/// How a new range interacts with the ranges already selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClearMode {
    /// Keep every existing range and add the new one
    None,
    /// Replace the range currently being built
    Current,
    /// Drop every existing range
    All,
}

/// Granularity the selection model works at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    Row,
    Column,
    #[default]
    Cell,
}

/// A selection request handed to the selection model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionRange {
    pub r1: usize,
    pub c1: usize,
    pub r2: usize,
    pub c2: usize,
    pub cursor_row: usize,
    pub cursor_column: usize,
    pub clear: ClearMode,
}

impl SelectionRange {
    /// The far corner of the range, the part a drag moves.
    pub fn far_corner(&self) -> (usize, usize) {
        (self.r2, self.c2)
    }

    /// The anchor of the range, fixed for the lifetime of a drag.
    pub fn anchor(&self) -> (usize, usize) {
        (self.r1, self.c1)
    }
}

/// A range as stored by the selection model (no cursor, no clear mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRange {
    pub r1: usize,
    pub c1: usize,
    pub r2: usize,
    pub c2: usize,
}

impl CellRange {
    pub fn single(row: usize, column: usize) -> Self {
        Self {
            r1: row,
            c1: column,
            r2: row,
            c2: column,
        }
    }

    pub fn is_single_cell(&self) -> bool {
        self.r1 == self.r2 && self.c1 == self.c2
    }

    pub fn contains(&self, row: usize, column: usize) -> bool {
        let (top, bottom) = (self.r1.min(self.r2), self.r1.max(self.r2));
        let (left, right) = (self.c1.min(self.c2), self.c1.max(self.c2));
        (top..=bottom).contains(&row) && (left..=right).contains(&column)
    }
}

/// Axis-aligned rectangle in client pixels, used for overlay placement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Shrink the rectangle by `amount` on every side, never below zero size.
    pub fn inset(&self, amount: f32) -> Self {
        Self {
            x: self.x + amount,
            y: self.y + amount,
            width: (self.width - amount * 2.0).max(0.0),
            height: (self.height - amount * 2.0).max(0.0),
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Free-form key/value metadata the data model attaches to a cell.
pub type CellMetadata = BTreeMap<String, String>;

/// Snapshot of a hovered cell handed to tooltip formatters.
///
/// `bounds` is the cell rectangle in client coordinates at the moment of the
/// hover; it goes stale as soon as the grid scrolls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellConfig {
    pub region: Region,
    pub row: usize,
    pub column: usize,
    pub bounds: Rect,
    pub metadata: CellMetadata,
    pub value: Option<String>,
}

/// A statistics bin under the pointer in a column's filter row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BinHit {
    pub column: usize,
    pub bin: usize,
}
