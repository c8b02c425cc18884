//! Pointer, wheel and editor-key handling for the grid.
//!
//! ## Architecture
//!
//! The press machine (`PressState`) holds at most one live press. Pointer
//! events are handled by `impl GridPointerController` blocks split by event,
//! each borrowing the grid's collaborators through a `GridContext`.
//!
//! ## Modules
//!
//! - `state` - Press state enum and helper methods
//! - `region` - Resize-handle detection on header cells
//! - `selection` - Selection ranges for presses and drags
//! - `autoscroll` - Edge detection, timeout ramp and the tick handler
//! - `mouse_down` - Press start (resize, select, click, filter bins)
//! - `drag` - Pointer move (live resize, select drag, hover)
//! - `mouse_up` - Press end and editor activation
//! - `hover` - Hover tooltip, hovered filter bins, wheel and leave
//! - `editing` - Inline editor key and blur handling
//! - `events` - Event records and gpui adapters
//! - `coords` - Coordinate helpers

pub mod autoscroll;
pub mod coords;
mod drag;
mod editing;
pub mod events;
mod hover;
mod mouse_down;
mod mouse_up;
pub mod region;
pub mod selection;
mod state;

pub use autoscroll::{AutoscrollAxis, EdgeGeometry, arm_timeout, compute_timeout};
pub use editing::EditorKey;
pub use events::{PointerInput, WheelInput};
pub use region::resize_handle;
pub use selection::{PressModifiers, drag_range, press_range};
pub use state::PressState;
