//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestGridBuilder` - Builder for a replay session over an in-memory grid
//! - Cell position helpers for the default geometry
//!
//! Default geometry: 64px row header, two 20px column-header rows (filter
//! row then label row), 64x20 body cells, 400x300 viewport at the client
//! origin, 100 rows by 20 columns.

#![allow(dead_code)]

use gridpointer::memory::GridSpec;
use gridpointer::replay::{CellSpec, ReplaySession};
use gridpointer::settings::InteractionSettings;
use gridpointer::types::{Region, SelectionMode};

pub const HEADER_WIDTH: f32 = 64.0;
pub const HEADER_HEIGHT: f32 = 40.0;
pub const ROW_HEIGHT: f32 = 20.0;
pub const COLUMN_WIDTH: f32 = 64.0;

// ============================================================================
// TestGridBuilder
// ============================================================================

/// Builder for a [`ReplaySession`] with seeded cells.
///
/// # Example
/// ```ignore
/// let mut session = TestGridBuilder::new()
///     .with_value(3, 2, "42")
///     .with_tooltip(3, 2, "answer")
///     .build();
/// ```
pub struct TestGridBuilder {
    spec: GridSpec,
    settings: InteractionSettings,
    cells: Vec<CellSpec>,
    mode: SelectionMode,
}

impl Default for TestGridBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestGridBuilder {
    pub fn new() -> Self {
        Self {
            spec: GridSpec::new(100, 20, 400.0, 300.0),
            settings: InteractionSettings::default(),
            cells: Vec::new(),
            mode: SelectionMode::Cell,
        }
    }

    pub fn with_size(mut self, rows: usize, columns: usize) -> Self {
        self.spec.rows = rows;
        self.spec.columns = columns;
        self
    }

    pub fn with_filter_bins(mut self, bins: Vec<usize>) -> Self {
        self.spec.filter_bins = bins;
        self
    }

    pub fn with_settings(mut self, settings: InteractionSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_value(mut self, row: usize, column: usize, value: &str) -> Self {
        self.cell(row, column).value = Some(value.to_string());
        self
    }

    pub fn with_tooltip(mut self, row: usize, column: usize, tooltip: &str) -> Self {
        self.cell(row, column).tooltip = Some(tooltip.to_string());
        self
    }

    pub fn with_metadata(mut self, row: usize, column: usize, key: &str, value: &str) -> Self {
        self.cell(row, column)
            .metadata
            .insert(key.to_string(), value.to_string());
        self
    }

    fn cell(&mut self, row: usize, column: usize) -> &mut CellSpec {
        let index = match self
            .cells
            .iter()
            .position(|cell| cell.row == row && cell.column == column)
        {
            Some(index) => index,
            None => {
                self.cells.push(CellSpec {
                    region: Region::Body,
                    row,
                    column,
                    value: None,
                    tooltip: None,
                    metadata: Default::default(),
                });
                self.cells.len() - 1
            }
        };
        &mut self.cells[index]
    }

    pub fn build(self) -> ReplaySession {
        let mut session = ReplaySession::new(&self.spec, self.settings);
        session.selection_mut().set_mode(self.mode);
        for cell in &self.cells {
            session.seed_cell(cell);
        }
        session
    }
}

/// A session over the default grid.
pub fn default_session() -> ReplaySession {
    TestGridBuilder::new().build()
}

// ============================================================================
// Positions (client coordinates, no scroll)
// ============================================================================

/// Center of body cell `(row, column)`.
pub fn body_point(row: usize, column: usize) -> (f32, f32) {
    (
        HEADER_WIDTH + column as f32 * COLUMN_WIDTH + COLUMN_WIDTH / 2.0,
        HEADER_HEIGHT + row as f32 * ROW_HEIGHT + ROW_HEIGHT / 2.0,
    )
}

/// Center of the row-header cell for `row`.
pub fn row_header_point(row: usize) -> (f32, f32) {
    (HEADER_WIDTH / 2.0, HEADER_HEIGHT + row as f32 * ROW_HEIGHT + ROW_HEIGHT / 2.0)
}

/// Center of column-header cell `(header_row, column)`.
pub fn column_header_point(header_row: usize, column: usize) -> (f32, f32) {
    (
        HEADER_WIDTH + column as f32 * COLUMN_WIDTH + COLUMN_WIDTH / 2.0,
        header_row as f32 * ROW_HEIGHT + ROW_HEIGHT / 2.0,
    )
}

/// Press and release on a body cell.
pub fn click_cell(session: &mut ReplaySession, row: usize, column: usize) {
    let (x, y) = body_point(row, column);
    session.down(x, y);
    session.up(x, y);
}

/// Click a body cell twice so the second release opens the editor.
pub fn open_editor(session: &mut ReplaySession, row: usize, column: usize) {
    click_cell(session, row, column);
    click_cell(session, row, column);
}
