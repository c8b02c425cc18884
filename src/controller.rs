//! The pointer controller: press machine, hover tooltip and inline editor
//! state for one grid.
//!
//! Event handlers live in [`crate::input`] as `impl GridPointerController`
//! blocks split by event. Collaborators are borrowed per call through
//! [`GridContext`](crate::grid::GridContext).

use crate::cursor::CursorOverrides;
use crate::grid::{GridContext, TooltipFormatter};
use crate::input::PressState;
use crate::overlay::{InlineEditor, TooltipOverlay};
use crate::settings::InteractionSettings;
use crate::types::{BinHit, CellConfig};
use gpui::{CursorStyle, Pixels, Point};
use tracing::debug;

/// The cell under the pointer and where the pointer was.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverState {
    pub cell: CellConfig,
    pub pointer: Point<Pixels>,
}

pub struct GridPointerController {
    pub(crate) settings: InteractionSettings,
    pub(crate) press: PressState,
    /// Bumped for every press; stale autoscroll tickets carry an older value
    pub(crate) press_generation: u64,
    /// Bumped whenever autoscroll is armed from the disarmed state
    pub(crate) autoscroll_chain: u64,
    pub(crate) hover: Option<HoverState>,
    pub(crate) tooltip: TooltipOverlay,
    pub(crate) editor: InlineEditor,
    pub(crate) cursors: CursorOverrides,
    /// Cursor derived from the resize handle under the pointer
    pub(crate) viewport_cursor: CursorStyle,
    pub(crate) formatter: Option<Box<dyn TooltipFormatter>>,
    /// Last filter bin reported to the data model
    pub(crate) hovered_bin: Option<BinHit>,
    pub(crate) disposed: bool,
}

impl Default for GridPointerController {
    fn default() -> Self {
        Self::new()
    }
}

impl GridPointerController {
    pub fn new() -> Self {
        Self::with_settings(InteractionSettings::default())
    }

    pub fn with_settings(settings: InteractionSettings) -> Self {
        let mut tooltip = TooltipOverlay::default();
        tooltip.attach();
        let mut editor = InlineEditor::default();
        editor.attach();

        Self {
            settings,
            press: PressState::Idle,
            press_generation: 0,
            autoscroll_chain: 0,
            hover: None,
            tooltip,
            editor,
            cursors: CursorOverrides::new(),
            viewport_cursor: CursorStyle::Arrow,
            formatter: None,
            hovered_bin: None,
            disposed: false,
        }
    }

    /// Use a custom tooltip formatter instead of the data model's tooltips.
    pub fn set_formatter(&mut self, formatter: impl TooltipFormatter + 'static) {
        self.formatter = Some(Box::new(formatter));
    }

    pub fn clear_formatter(&mut self) {
        self.formatter = None;
    }

    /// Share an existing override stack, e.g. one owned by the host window.
    pub fn with_cursor_overrides(mut self, cursors: CursorOverrides) -> Self {
        self.cursors = cursors;
        self
    }

    /// Cursor the viewport should show: the live press override, if any,
    /// else the hover cursor.
    pub fn cursor(&self) -> CursorStyle {
        self.cursors.current().unwrap_or(self.viewport_cursor)
    }

    /// End the current press, releasing its cursor override and cancelling
    /// any armed autoscroll.
    pub fn release_press(&mut self) {
        let previous = self.press.take();
        if !previous.is_idle() {
            debug!(
                kind = previous.kind(),
                generation = self.press_generation,
                "Press released"
            );
        }
    }

    /// Tear the controller down, clearing any filter bin it reported as
    /// hovered. Every later event is ignored.
    pub fn dispose(&mut self, ctx: &mut GridContext<'_>) {
        if self.disposed {
            return;
        }
        self.release_press();
        self.report_hovered_bin(ctx, None);
        self.hover = None;
        self.tooltip.detach();
        self.editor.detach();
        self.disposed = true;
        debug!("Pointer controller disposed");
    }

    /// Record the tooltip's rendered size so placement can clip it.
    pub fn measure_tooltip(&mut self, width: f32, height: f32) {
        self.tooltip.set_size(width, height, &self.settings.tooltip);
    }

    pub fn settings(&self) -> &InteractionSettings {
        &self.settings
    }

    pub fn press(&self) -> &PressState {
        &self.press
    }

    pub fn hover(&self) -> Option<&HoverState> {
        self.hover.as_ref()
    }

    pub fn tooltip(&self) -> &TooltipOverlay {
        &self.tooltip
    }

    pub fn editor(&self) -> &InlineEditor {
        &self.editor
    }

    pub fn cursor_overrides(&self) -> &CursorOverrides {
        &self.cursors
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub(crate) fn clear_hover(&mut self) {
        self.hover = None;
        self.tooltip.hide();
    }

    /// Start a new press generation; older autoscroll tickets go stale.
    pub(crate) fn next_generation(&mut self) -> u64 {
        self.press_generation += 1;
        self.press_generation
    }
}

impl std::fmt::Debug for GridPointerController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridPointerController")
            .field("press", &self.press)
            .field("press_generation", &self.press_generation)
            .field("hover", &self.hover)
            .field("viewport_cursor", &self.viewport_cursor)
            .field("has_formatter", &self.formatter.is_some())
            .field("disposed", &self.disposed)
            .finish()
    }
}
