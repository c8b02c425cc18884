//! In-memory selection model with clear-mode semantics.

use crate::grid::SelectionModel;
use crate::types::{CellRange, ClearMode, SelectionMode, SelectionRange};

#[derive(Debug, Clone)]
pub struct MemorySelection {
    row_count: usize,
    column_count: usize,
    mode: SelectionMode,
    cursor: (usize, usize),
    ranges: Vec<CellRange>,
    requests: Vec<SelectionRange>,
}

impl MemorySelection {
    pub fn new(row_count: usize, column_count: usize) -> Self {
        Self {
            row_count,
            column_count,
            mode: SelectionMode::Cell,
            cursor: (0, 0),
            ranges: Vec::new(),
            requests: Vec::new(),
        }
    }

    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
    }

    /// Stored ranges, oldest first.
    pub fn ranges(&self) -> &[CellRange] {
        &self.ranges
    }

    /// Every range passed to `select`, before clamping.
    pub fn requests(&self) -> &[SelectionRange] {
        &self.requests
    }

    pub fn last_request(&self) -> Option<&SelectionRange> {
        self.requests.last()
    }

    pub fn clear(&mut self) {
        self.ranges.clear();
    }
}

impl SelectionModel for MemorySelection {
    fn cursor_row(&self) -> usize {
        self.cursor.0
    }

    fn cursor_column(&self) -> usize {
        self.cursor.1
    }

    fn selection_mode(&self) -> SelectionMode {
        self.mode
    }

    fn select(&mut self, range: SelectionRange) {
        self.requests.push(range);
        if self.row_count == 0 || self.column_count == 0 {
            return;
        }
        let last_row = self.row_count - 1;
        let last_column = self.column_count - 1;

        let mut stored = CellRange {
            r1: range.r1.min(last_row),
            c1: range.c1.min(last_column),
            r2: range.r2.min(last_row),
            c2: range.c2.min(last_column),
        };
        match self.mode {
            SelectionMode::Row => {
                stored.c1 = 0;
                stored.c2 = last_column;
            }
            SelectionMode::Column => {
                stored.r1 = 0;
                stored.r2 = last_row;
            }
            SelectionMode::Cell => {}
        }

        match range.clear {
            ClearMode::All => self.ranges.clear(),
            ClearMode::Current => {
                self.ranges.pop();
            }
            ClearMode::None => {}
        }
        self.ranges.push(stored);
        self.cursor = (range.cursor_row.min(last_row), range.cursor_column.min(last_column));
    }

    fn current_selection(&self) -> Option<CellRange> {
        self.ranges.last().copied()
    }
}
