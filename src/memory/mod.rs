//! In-memory collaborators for tests and script replay.
//!
//! - `grid` - Section geometry, scrolling and hit testing
//! - `selection` - Range list with clear-mode semantics
//! - `data` - Cell values plus logs of writes, hovered bins and filters
//! - `scheduler` - Timer queue driven by hand

mod data;
mod grid;
mod scheduler;
mod sections;
mod selection;

pub use data::{CellWrite, FilterRequest, HoveredBin, MemoryData};
pub use grid::{GridSpec, MemoryGrid, SectionAxis, SectionResize};
pub use scheduler::{MemoryScheduler, ScheduledTick};
pub use sections::SectionList;
pub use selection::MemorySelection;
