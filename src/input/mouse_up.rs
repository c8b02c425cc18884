//! Pointer up - finalize the press, open the editor on a confirmed click.

use crate::controller::GridPointerController;
use crate::grid::GridContext;
use crate::types::Region;
use super::coords::cell_client_rect;
use super::events::PointerInput;
use super::state::PressState;

impl GridPointerController {
    pub fn pointer_up(&mut self, ctx: &mut GridContext<'_>, input: &PointerInput) {
        if self.disposed {
            return;
        }

        if let PressState::Click {
            region,
            row,
            column,
            ..
        } = self.press
        {
            let hit = ctx.grid.hit_test(input.position);
            // Header clicks are tracked for release symmetry but never edit
            if region == Region::Body && hit.same_cell(region, row, column) {
                let bounds = cell_client_rect(input.position, &hit);
                self.open_editor(ctx, region, row, column, bounds);
            }
        }

        self.release_press();
    }
}
