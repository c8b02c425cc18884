//! Interaction constants.
//!
//! Centralizes the pixel bands, timings and offsets used by the pointer
//! handlers. Every value here is also the default of the matching field in
//! [`crate::settings::InteractionSettings`].

// ============================================================================
// Resize Handles
// ============================================================================

/// Leading resize band for row-header and corner-header cells
pub const HEADER_HANDLE_LEADING: f32 = 5.0;

/// Trailing resize band for row-header and corner-header cells
pub const HEADER_HANDLE_TRAILING: f32 = 6.0;

/// Leading resize band for column-header cells (headers are visually thinner)
pub const COLUMN_HEADER_HANDLE_LEADING: f32 = 2.0;

/// Trailing resize band for column-header cells
pub const COLUMN_HEADER_HANDLE_TRAILING: f32 = 3.0;

// ============================================================================
// Column Header Rows
// ============================================================================

/// Column-header row holding the statistics filter bins
pub const FILTER_ROW: usize = 0;

/// Column-header row holding the column labels
pub const LABEL_ROW: usize = 1;

// ============================================================================
// Autoscroll
// ============================================================================

/// Fastest autoscroll repeat interval in milliseconds
pub const AUTOSCROLL_MIN_INTERVAL_MS: f32 = 5.0;

/// Interval added on top of the minimum right at the edge threshold
pub const AUTOSCROLL_RAMP_MS: f32 = 120.0;

/// Distance past the edge over which the interval ramps down to the minimum
pub const AUTOSCROLL_RAMP_DISTANCE: f32 = 128.0;

// ============================================================================
// Overlays
// ============================================================================

/// Horizontal tooltip offset from the pointer
pub const TOOLTIP_OFFSET_X: f32 = 12.0;

/// Vertical tooltip offset from the pointer
pub const TOOLTIP_OFFSET_Y: f32 = 14.0;

/// Inset of the inline editor inside the edited cell
pub const EDITOR_INSET: f32 = 2.0;

// ============================================================================
// Settings
// ============================================================================

/// Directory name under the platform config dir
pub const SETTINGS_DIR: &str = "gridpointer";

/// Settings file name
pub const SETTINGS_FILE: &str = "settings.json";
