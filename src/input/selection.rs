//! Selection policy - ranges requested on press and during a select drag.

use crate::grid::SelectionModel;
use crate::types::{CellRange, ClearMode, Region, SelectionMode, SelectionRange, UNBOUNDED};
use gpui::Modifiers;

/// Modifier keys relevant to selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PressModifiers {
    pub shift: bool,
    /// Cmd on macOS, Ctrl elsewhere
    pub accel: bool,
}

impl PressModifiers {
    pub fn from_modifiers(modifiers: &Modifiers) -> Self {
        Self {
            shift: modifiers.shift,
            accel: accel(modifiers),
        }
    }
}

/// Whether the platform's accelerator key is held.
pub fn accel(modifiers: &Modifiers) -> bool {
    if cfg!(target_os = "macos") {
        modifiers.platform
    } else {
        modifiers.control
    }
}

/// Range requested when a select press begins on `(row, column)` of `region`.
///
/// `cursor` is the selection model's cursor before the press. Accel adds a
/// new range, shift extends from the cursor, a plain press replaces
/// everything. Row and column headers span the whole cross axis. Returns
/// `None` for regions that never select.
pub fn press_range(
    region: Region,
    row: usize,
    column: usize,
    modifiers: PressModifiers,
    cursor: (usize, usize),
) -> Option<SelectionRange> {
    let (cursor_row, cursor_column) = cursor;
    let range = match region {
        Region::Body => {
            if modifiers.accel {
                single(row, column, row, column, ClearMode::None)
            } else if modifiers.shift {
                SelectionRange {
                    r1: cursor_row,
                    c1: cursor_column,
                    r2: row,
                    c2: column,
                    cursor_row,
                    cursor_column,
                    clear: ClearMode::Current,
                }
            } else {
                single(row, column, row, column, ClearMode::All)
            }
        }
        Region::RowHeader => {
            let (r1, cursor, clear) = if modifiers.accel {
                (row, (row, 0), ClearMode::None)
            } else if modifiers.shift {
                (cursor_row, cursor, ClearMode::Current)
            } else {
                (row, (row, 0), ClearMode::All)
            };
            SelectionRange {
                r1,
                c1: 0,
                r2: row,
                c2: UNBOUNDED,
                cursor_row: cursor.0,
                cursor_column: cursor.1,
                clear,
            }
        }
        Region::ColumnHeader => {
            let (c1, cursor, clear) = if modifiers.accel {
                (column, (0, column), ClearMode::None)
            } else if modifiers.shift {
                (cursor_column, cursor, ClearMode::Current)
            } else {
                (column, (0, column), ClearMode::All)
            };
            SelectionRange {
                r1: 0,
                c1,
                r2: UNBOUNDED,
                c2: column,
                cursor_row: cursor.0,
                cursor_column: cursor.1,
                clear,
            }
        }
        Region::CornerHeader | Region::Void => return None,
    };
    Some(range)
}

fn single(
    row: usize,
    column: usize,
    cursor_row: usize,
    cursor_column: usize,
    clear: ClearMode,
) -> SelectionRange {
    SelectionRange {
        r1: row,
        c1: column,
        r2: row,
        c2: column,
        cursor_row,
        cursor_column,
        clear,
    }
}

/// Range requested while dragging a select press.
///
/// `anchor` is the press origin and never moves; `target` is the body cell
/// under the clamped pointer. Row-header presses and row mode span whole
/// rows, column-header presses and column mode whole columns.
pub fn drag_range(
    press_region: Region,
    mode: SelectionMode,
    anchor: (usize, usize),
    target: (usize, usize),
    cursor: (usize, usize),
) -> SelectionRange {
    let (r1, c1, r2, c2) = if press_region == Region::RowHeader || mode == SelectionMode::Row {
        (anchor.0, 0, target.0, UNBOUNDED)
    } else if press_region == Region::ColumnHeader || mode == SelectionMode::Column {
        (0, anchor.1, UNBOUNDED, target.1)
    } else {
        (anchor.0, anchor.1, target.0, target.1)
    };
    SelectionRange {
        r1,
        c1,
        r2,
        c2,
        cursor_row: cursor.0,
        cursor_column: cursor.1,
        clear: ClearMode::Current,
    }
}

/// Whether `(row, column)` is the cursor and the only selected cell.
pub fn is_sole_cursor_cell(model: &dyn SelectionModel, row: usize, column: usize) -> bool {
    model.cursor_row() == row
        && model.cursor_column() == column
        && model.current_selection() == Some(CellRange::single(row, column))
}
