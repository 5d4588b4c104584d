//! Project settings that shape pointer interpretation.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::consts::DEFAULT_ZOOM_PERCENT;
use crate::input::Tool;

/// Errors produced while reading project settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The settings JSON could not be decoded.
    #[error("settings parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    /// A zoom of zero percent cannot map pixels to tiles.
    #[error("zoom must be a positive percentage")]
    InvalidZoom,
}

/// The `settings` object of a project document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSettings {
    /// Zoom level in percent; 100 when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<u32>,
    /// Draw collision tiles even when the collisions tool is not active.
    #[serde(default)]
    pub show_collisions: bool,
}

impl ProjectSettings {
    /// Parse and validate settings from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::InvalidZoom`] for a zero zoom.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        if settings.zoom == Some(0) {
            return Err(ConfigError::InvalidZoom);
        }
        Ok(settings)
    }

    /// Zoom as a scale factor (`percent / 100`).
    #[must_use]
    pub fn zoom_ratio(&self) -> f64 {
        f64::from(self.zoom.filter(|z| *z > 0).unwrap_or(DEFAULT_ZOOM_PERCENT)) / 100.0
    }

    /// Camera for the current zoom.
    #[must_use]
    pub fn camera(&self) -> Camera {
        Camera::new(self.zoom_ratio())
    }

    /// Whether collision tiles are visible, which the collisions tool forces on.
    #[must_use]
    pub fn show_collisions(&self, tool: Tool) -> bool {
        self.show_collisions || tool == Tool::Collisions
    }
}
