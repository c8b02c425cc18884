//! Inline editor activation, key handling and teardown.
//!
//! Every key-up writes the editor's value straight through to the data
//! model. Enter commits and closes; Escape writes an empty string and
//! closes; blur closes without writing.

use crate::controller::GridPointerController;
use crate::grid::GridContext;
use crate::overlay::EditTarget;
use crate::types::{Rect, Region};
use tracing::debug;

/// Keys the editor distinguishes, matched on gpui key names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    Enter,
    Escape,
    Other,
}

impl EditorKey {
    pub fn parse(key: &str) -> Self {
        if key.eq_ignore_ascii_case("enter") {
            Self::Enter
        } else if key.eq_ignore_ascii_case("escape") {
            Self::Escape
        } else {
            Self::Other
        }
    }
}

impl GridPointerController {
    /// Open the shared editor over `bounds`, seeded with the cell's value.
    pub(crate) fn open_editor(
        &mut self,
        ctx: &mut GridContext<'_>,
        region: Region,
        row: usize,
        column: usize,
        bounds: Rect,
    ) {
        if self.editor.is_visible() {
            self.teardown_editor();
        }
        let value = ctx.data.data(region, row, column).unwrap_or_default();
        let target = EditTarget { region, row, column };
        if self.editor.open(target, bounds.inset(self.settings.editor_inset), value) {
            debug!(row, column, "Editor opened");
        }
    }

    /// Key-up inside the editor; `value` is the input's text after the key.
    pub fn editor_key_up(&mut self, ctx: &mut GridContext<'_>, key: &str, value: &str) {
        if self.disposed || !self.editor.is_visible() {
            return;
        }
        let Some(target) = self.editor.target() else {
            return;
        };

        match EditorKey::parse(key) {
            EditorKey::Enter => {
                ctx.data.set_data(target.region, target.row, target.column, value);
                debug!(row = target.row, column = target.column, "Editor committed");
                self.teardown_editor();
            }
            EditorKey::Escape => {
                ctx.data.set_data(target.region, target.row, target.column, "");
                debug!(row = target.row, column = target.column, "Editor cancelled");
                self.teardown_editor();
            }
            EditorKey::Other => {
                self.editor.set_value(value);
                ctx.data.set_data(target.region, target.row, target.column, value);
            }
        }
    }

    /// The editor lost focus.
    pub fn editor_blur(&mut self) {
        if self.disposed || !self.editor.is_visible() {
            return;
        }
        self.teardown_editor();
    }

    fn teardown_editor(&mut self) {
        self.editor.close();
    }
}
