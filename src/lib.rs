//! Pointer-input controller for a virtualized data grid.
//!
//! Translates pointer, wheel and editor key events into grid operations:
//! range selection, section resizing, autoscroll while dragging past an
//! edge, hover tooltips and inline cell editing. The grid, its selection
//! model, its data model and the host's timers are collaborators described
//! by the traits in [`grid`].
//!
//! ```ignore
//! let mut controller = GridPointerController::new();
//! let mut ctx = GridContext::new(&mut grid, Some(&mut selection), &mut data, &mut timers);
//! controller.pointer_down(&mut ctx, &PointerInput::new(120.0, 80.0));
//! controller.pointer_move(&mut ctx, &PointerInput::new(120.0, 140.0));
//! controller.pointer_up(&mut ctx, &PointerInput::new(120.0, 140.0));
//! ```

pub mod constants;
pub mod controller;
pub mod cursor;
pub mod grid;
pub mod input;
pub mod memory;
pub mod overlay;
pub mod perf;
pub mod replay;
pub mod settings;
pub mod types;

pub use controller::{GridPointerController, HoverState};
pub use cursor::{CursorOverride, CursorOverrides, cursor_for_handle};
pub use grid::{
    AutoscrollScheduler, AutoscrollTicket, DataModel, GridContext, GridView, SelectionModel,
    TooltipFormatter,
};
pub use input::{EditorKey, PointerInput, PressModifiers, PressState, WheelInput};
pub use overlay::{EditTarget, InlineEditor, TooltipOverlay};
pub use settings::{InteractionSettings, SettingsError};
pub use types::*;
