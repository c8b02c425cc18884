//! Interaction settings - resize bands, autoscroll ramp, overlay offsets.
//!
//! Settings are stored as JSON. Every field has a default, so a partial file
//! only overrides what it names.

use crate::constants::*;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while loading settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Leading/trailing pixel bands that count as a resize handle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandleMargins {
    pub leading: f32,
    pub trailing: f32,
}

impl HandleMargins {
    /// Row-header and corner-header band.
    pub const HEADER: Self = Self {
        leading: HEADER_HANDLE_LEADING,
        trailing: HEADER_HANDLE_TRAILING,
    };

    /// Column-header band.
    pub const COLUMN_HEADER: Self = Self {
        leading: COLUMN_HEADER_HANDLE_LEADING,
        trailing: COLUMN_HEADER_HANDLE_TRAILING,
    };
}

impl Default for HandleMargins {
    fn default() -> Self {
        Self::HEADER
    }
}

/// A handle band as written in a settings file; absent sides keep the
/// region's default.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HandleMarginsPatch {
    leading: Option<f32>,
    trailing: Option<f32>,
}

impl HandleMarginsPatch {
    fn over(self, base: HandleMargins) -> HandleMargins {
        HandleMargins {
            leading: self.leading.unwrap_or(base.leading),
            trailing: self.trailing.unwrap_or(base.trailing),
        }
    }
}

fn header_handles<'de, D: Deserializer<'de>>(deserializer: D) -> Result<HandleMargins, D::Error> {
    HandleMarginsPatch::deserialize(deserializer).map(|patch| patch.over(HandleMargins::HEADER))
}

fn column_header_handles<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<HandleMargins, D::Error> {
    HandleMarginsPatch::deserialize(deserializer)
        .map(|patch| patch.over(HandleMargins::COLUMN_HEADER))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoscrollSettings {
    pub min_interval_ms: f32,
    pub ramp_ms: f32,
    pub ramp_distance: f32,
}

impl Default for AutoscrollSettings {
    fn default() -> Self {
        Self {
            min_interval_ms: AUTOSCROLL_MIN_INTERVAL_MS,
            ramp_ms: AUTOSCROLL_RAMP_MS,
            ramp_distance: AUTOSCROLL_RAMP_DISTANCE,
        }
    }
}

impl AutoscrollSettings {
    /// Repeat interval for a pointer `distance` pixels past the edge threshold.
    ///
    /// `min + ramp * (1 - min(ramp_distance, |distance|) / ramp_distance)`:
    /// the interval shrinks from `min + ramp` at the threshold to `min` once
    /// the pointer is `ramp_distance` past it.
    pub fn timeout_for(&self, distance: f32) -> Duration {
        let span = self.ramp_distance.max(f32::EPSILON);
        let clamped = distance.abs().min(span);
        let ms = self.min_interval_ms + self.ramp_ms * (1.0 - clamped / span);
        Duration::from_micros((ms.max(0.0) * 1000.0).round() as u64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipSettings {
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for TooltipSettings {
    fn default() -> Self {
        Self {
            offset_x: TOOLTIP_OFFSET_X,
            offset_y: TOOLTIP_OFFSET_Y,
        }
    }
}

/// All tunables of the pointer controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Resize band for row-header and corner-header cells
    #[serde(deserialize_with = "header_handles")]
    pub header_handles: HandleMargins,
    /// Resize band for column-header cells
    #[serde(deserialize_with = "column_header_handles")]
    pub column_header_handles: HandleMargins,
    pub autoscroll: AutoscrollSettings,
    pub tooltip: TooltipSettings,
    pub editor_inset: f32,
    /// Column-header row holding the filter bins
    pub filter_row: usize,
    /// Column-header row holding the labels
    pub label_row: usize,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            header_handles: HandleMargins::HEADER,
            column_header_handles: HandleMargins::COLUMN_HEADER,
            autoscroll: AutoscrollSettings::default(),
            tooltip: TooltipSettings::default(),
            editor_inset: EDITOR_INSET,
            filter_row: FILTER_ROW,
            label_row: LABEL_ROW,
        }
    }
}

impl InteractionSettings {
    /// Parse settings from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file.
    pub fn load_from(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Loaded interaction settings");
        Ok(settings)
    }

    /// Load settings from the default location, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Falling back to default interaction settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// `<config_dir>/gridpointer/settings.json`, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}
