//! Scripted event replay against the in-memory collaborators.
//!
//! A script describes a grid and a list of pointer, wheel, timer and editor
//! events. Replaying it drives a [`GridPointerController`] and reports what
//! the collaborators saw.
//!
//! ```json
//! {
//!   "grid": { "rows": 100, "columns": 20, "viewport_width": 400, "viewport_height": 300 },
//!   "cells": [{ "row": 3, "column": 2, "value": "42" }],
//!   "events": [
//!     { "type": "down", "x": 200, "y": 110 },
//!     { "type": "move", "x": 200, "y": 150 },
//!     { "type": "up", "x": 200, "y": 150 }
//!   ]
//! }
//! ```

use crate::controller::GridPointerController;
use crate::cursor::cursor_name;
use crate::grid::{GridContext, GridView, SelectionModel};
use crate::input::{PointerInput, PressModifiers, WheelInput};
use crate::memory::{
    CellWrite, FilterRequest, GridSpec, HoveredBin, MemoryData, MemoryGrid, MemoryScheduler,
    MemorySelection, SectionResize,
};
use crate::overlay::EditTarget;
use crate::perf::{HandlerStats, timed};
use crate::settings::InteractionSettings;
use crate::types::{CellMetadata, CellRange, Region, SelectionMode, SelectionRange};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

fn body_region() -> Region {
    Region::Body
}

/// Initial content of one cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellSpec {
    #[serde(default = "body_region")]
    pub region: Region,
    pub row: usize,
    pub column: usize,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub tooltip: Option<String>,
    #[serde(default)]
    pub metadata: CellMetadata,
}

/// One scripted event. Coordinates are client pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ReplayEvent {
    Down {
        x: f32,
        y: f32,
        #[serde(default)]
        shift: bool,
        #[serde(default)]
        accel: bool,
    },
    Move {
        x: f32,
        y: f32,
        #[serde(default)]
        shift: bool,
        #[serde(default)]
        accel: bool,
    },
    Up {
        x: f32,
        y: f32,
    },
    Leave,
    Wheel {
        #[serde(default)]
        dx: f32,
        #[serde(default)]
        dy: f32,
    },
    /// Fire the oldest pending autoscroll timer
    Tick,
    Key {
        key: String,
        #[serde(default)]
        value: String,
    },
    Blur,
    /// Report the tooltip's rendered size
    Measure {
        width: f32,
        height: f32,
    },
}

impl ReplayEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Down { .. } => "down",
            Self::Move { .. } => "move",
            Self::Up { .. } => "up",
            Self::Leave => "leave",
            Self::Wheel { .. } => "wheel",
            Self::Tick => "tick",
            Self::Key { .. } => "key",
            Self::Blur => "blur",
            Self::Measure { .. } => "measure",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    pub grid: GridSpec,
    #[serde(default)]
    pub cells: Vec<CellSpec>,
    #[serde(default)]
    pub settings: Option<InteractionSettings>,
    #[serde(default)]
    pub selection_mode: SelectionMode,
    #[serde(default)]
    pub events: Vec<ReplayEvent>,
}

impl ReplayScript {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Replay the script. `settings` overrides the script's own settings.
    pub fn run(&self, settings: Option<InteractionSettings>) -> ReplayReport {
        let settings = settings
            .or_else(|| self.settings.clone())
            .unwrap_or_default();
        let mut session = ReplaySession::new(&self.grid, settings);
        session.selection_mut().set_mode(self.selection_mode);
        for cell in &self.cells {
            session.seed_cell(cell);
        }
        session.run(&self.events);
        for (kind, stats) in session.timings() {
            debug!(
                kind,
                calls = stats.calls(),
                mean_us = stats.mean().as_micros() as u64,
                p95_us = stats.percentile(0.95).as_micros() as u64,
                over_budget = stats.over_budget(),
                "Handler timings"
            );
        }
        session.report()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipReport {
    pub visible: bool,
    pub content: Option<String>,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorReport {
    pub visible: bool,
    pub value: String,
    pub target: Option<EditTarget>,
}

/// What the collaborators observed during a replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayReport {
    /// Every range passed to `select`, unclamped
    pub selections: Vec<SelectionRange>,
    /// Ranges stored by the selection model at the end
    pub ranges: Vec<CellRange>,
    pub writes: Vec<CellWrite>,
    pub resizes: Vec<SectionResize>,
    pub filters: Vec<FilterRequest>,
    pub hovered_bins: Vec<HoveredBin>,
    pub scroll_x: f32,
    pub scroll_y: f32,
    pub cursor: String,
    pub press: String,
    pub tooltip: TooltipReport,
    pub editor: EditorReport,
    pub pending_timers: usize,
}

/// A controller wired to in-memory collaborators.
#[derive(Debug)]
pub struct ReplaySession {
    controller: GridPointerController,
    grid: MemoryGrid,
    selection: MemorySelection,
    selection_attached: bool,
    data: MemoryData,
    scheduler: MemoryScheduler,
    timings: BTreeMap<&'static str, HandlerStats>,
}

impl ReplaySession {
    pub fn new(spec: &GridSpec, settings: InteractionSettings) -> Self {
        Self {
            controller: GridPointerController::with_settings(settings),
            grid: MemoryGrid::new(spec),
            selection: MemorySelection::new(spec.rows, spec.columns),
            selection_attached: true,
            data: MemoryData::new(),
            scheduler: MemoryScheduler::new(),
            timings: BTreeMap::new(),
        }
    }

    pub fn seed_cell(&mut self, cell: &CellSpec) {
        if let Some(value) = &cell.value {
            self.data.set_value(cell.region, cell.row, cell.column, value.clone());
        }
        if let Some(tooltip) = &cell.tooltip {
            self.data.set_tooltip(cell.region, cell.row, cell.column, tooltip.clone());
        }
        if !cell.metadata.is_empty() {
            self.data
                .set_metadata(cell.region, cell.row, cell.column, cell.metadata.clone());
        }
    }

    /// Split the session into the controller and a context over the collaborators.
    pub fn context(&mut self) -> (&mut GridPointerController, GridContext<'_>) {
        let selection = if self.selection_attached {
            Some(&mut self.selection as &mut dyn SelectionModel)
        } else {
            None
        };
        let ctx = GridContext::new(&mut self.grid, selection, &mut self.data, &mut self.scheduler);
        (&mut self.controller, ctx)
    }

    pub fn run(&mut self, events: &[ReplayEvent]) {
        for event in events {
            self.apply(event);
        }
    }

    /// Apply one event, recording how long the controller took.
    pub fn apply(&mut self, event: &ReplayEvent) {
        debug!(?event, "Replaying event");
        let ((), elapsed) = timed(|| self.dispatch(event));
        self.timings.entry(event.kind()).or_default().record(elapsed);
    }

    fn dispatch(&mut self, event: &ReplayEvent) {
        match event {
            ReplayEvent::Down { x, y, shift, accel } => {
                self.down_with(*x, *y, modifiers(*shift, *accel))
            }
            ReplayEvent::Move { x, y, shift, accel } => {
                self.move_with(*x, *y, modifiers(*shift, *accel))
            }
            ReplayEvent::Up { x, y } => self.up(*x, *y),
            ReplayEvent::Leave => self.leave(),
            ReplayEvent::Wheel { dx, dy } => self.wheel(*dx, *dy),
            ReplayEvent::Tick => {
                self.tick();
            }
            ReplayEvent::Key { key, value } => self.key(key, value),
            ReplayEvent::Blur => self.blur(),
            ReplayEvent::Measure { width, height } => self.measure(*width, *height),
        }
    }

    pub fn down(&mut self, x: f32, y: f32) {
        self.down_with(x, y, PressModifiers::default());
    }

    pub fn down_with(&mut self, x: f32, y: f32, modifiers: PressModifiers) {
        let input = PointerInput::new(x, y).with_modifiers(modifiers);
        let (controller, mut ctx) = self.context();
        controller.pointer_down(&mut ctx, &input);
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.move_with(x, y, PressModifiers::default());
    }

    pub fn move_with(&mut self, x: f32, y: f32, modifiers: PressModifiers) {
        let input = PointerInput::new(x, y).with_modifiers(modifiers);
        let (controller, mut ctx) = self.context();
        controller.pointer_move(&mut ctx, &input);
    }

    pub fn up(&mut self, x: f32, y: f32) {
        let input = PointerInput::new(x, y);
        let (controller, mut ctx) = self.context();
        controller.pointer_up(&mut ctx, &input);
    }

    pub fn leave(&mut self) {
        let (controller, mut ctx) = self.context();
        controller.pointer_leave(&mut ctx);
    }

    pub fn wheel(&mut self, dx: f32, dy: f32) {
        let input = WheelInput::new(dx, dy);
        let (controller, mut ctx) = self.context();
        controller.wheel(&mut ctx, &input);
    }

    /// Fire the oldest pending timer. Returns false when none is pending.
    pub fn tick(&mut self) -> bool {
        let Some(scheduled) = self.scheduler.pop() else {
            return false;
        };
        let (controller, mut ctx) = self.context();
        controller.autoscroll_tick(&mut ctx, scheduled.ticket);
        true
    }

    pub fn key(&mut self, key: &str, value: &str) {
        let (controller, mut ctx) = self.context();
        controller.editor_key_up(&mut ctx, key, value);
    }

    pub fn blur(&mut self) {
        self.controller.editor_blur();
    }

    pub fn dispose(&mut self) {
        let (controller, mut ctx) = self.context();
        controller.dispose(&mut ctx);
    }

    pub fn measure(&mut self, width: f32, height: f32) {
        self.controller.measure_tooltip(width, height);
    }

    pub fn set_selection_attached(&mut self, attached: bool) {
        self.selection_attached = attached;
    }

    pub fn controller(&self) -> &GridPointerController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut GridPointerController {
        &mut self.controller
    }

    pub fn grid(&self) -> &MemoryGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut MemoryGrid {
        &mut self.grid
    }

    pub fn selection(&self) -> &MemorySelection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut MemorySelection {
        &mut self.selection
    }

    pub fn data(&self) -> &MemoryData {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut MemoryData {
        &mut self.data
    }

    pub fn scheduler(&self) -> &MemoryScheduler {
        &self.scheduler
    }

    /// Durations of applied events, per event kind.
    pub fn timings(&self) -> &BTreeMap<&'static str, HandlerStats> {
        &self.timings
    }

    pub fn report(&self) -> ReplayReport {
        let tooltip = self.controller.tooltip();
        let (x, y) = tooltip.position();
        let editor = self.controller.editor();
        ReplayReport {
            selections: self.selection.requests().to_vec(),
            ranges: self.selection.ranges().to_vec(),
            writes: self.data.writes().to_vec(),
            resizes: self.grid.resizes().to_vec(),
            filters: self.data.filters().to_vec(),
            hovered_bins: self.data.hovered_bins().to_vec(),
            scroll_x: self.grid.scroll_x(),
            scroll_y: self.grid.scroll_y(),
            cursor: cursor_name(self.controller.cursor()).to_string(),
            press: self.controller.press().kind().to_string(),
            tooltip: TooltipReport {
                visible: tooltip.is_visible(),
                content: tooltip.is_visible().then(|| tooltip.content().to_string()),
                x,
                y,
            },
            editor: EditorReport {
                visible: editor.is_visible(),
                value: editor.value().to_string(),
                target: editor.target(),
            },
            pending_timers: self.scheduler.pending(),
        }
    }
}

fn modifiers(shift: bool, accel: bool) -> PressModifiers {
    PressModifiers { shift, accel }
}

