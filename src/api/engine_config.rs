use serde::{Deserialize, Serialize};

use crate::core::{AxisLabelConfig, CoordinateConfig, SideStrategy, ZoomState};
use crate::error::{TimelineError, TimelineResult};

use super::validation::{validate_current_age, validate_zoom_step_factor};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load timeline
/// setup without inventing their own ad-hoc format. Every field has a
/// default, so partial JSON documents are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineEngineConfig {
    #[serde(default)]
    pub initial_zoom: ZoomState,
    #[serde(default)]
    pub coordinates: CoordinateConfig,
    /// Factor applied by a single zoom-in step; zoom-out uses its inverse.
    #[serde(default = "default_zoom_step_factor")]
    pub zoom_step_factor: f64,
    #[serde(default)]
    pub side_strategy: SideStrategy,
    #[serde(default)]
    pub axis_labels: AxisLabelConfig,
    /// Age highlighted as "now" by the presentation layer.
    #[serde(default = "default_current_age")]
    pub current_age: f64,
}

impl Default for TimelineEngineConfig {
    fn default() -> Self {
        Self {
            initial_zoom: ZoomState::default(),
            coordinates: CoordinateConfig::default(),
            zoom_step_factor: default_zoom_step_factor(),
            side_strategy: SideStrategy::default(),
            axis_labels: AxisLabelConfig::default(),
            current_age: default_current_age(),
        }
    }
}

impl TimelineEngineConfig {
    /// Sets the initial zoom window.
    #[must_use]
    pub fn with_initial_zoom(mut self, zoom: ZoomState) -> Self {
        self.initial_zoom = zoom;
        self
    }

    /// Sets pixel mapping constants.
    #[must_use]
    pub fn with_coordinates(mut self, coordinates: CoordinateConfig) -> Self {
        self.coordinates = coordinates;
        self
    }

    #[must_use]
    pub fn with_zoom_step_factor(mut self, factor: f64) -> Self {
        self.zoom_step_factor = factor;
        self
    }

    /// Sets the goal/milestone side tie-break.
    #[must_use]
    pub fn with_side_strategy(mut self, strategy: SideStrategy) -> Self {
        self.side_strategy = strategy;
        self
    }

    #[must_use]
    pub fn with_axis_labels(mut self, axis_labels: AxisLabelConfig) -> Self {
        self.axis_labels = axis_labels;
        self
    }

    #[must_use]
    pub fn with_current_age(mut self, current_age: f64) -> Self {
        self.current_age = current_age;
        self
    }

    /// Validates constants and normalizes the initial zoom window.
    pub fn validate(self) -> TimelineResult<Self> {
        let coordinates = self.coordinates.validate()?;
        validate_zoom_step_factor(self.zoom_step_factor)?;
        validate_current_age(self.current_age)?;

        Ok(Self {
            initial_zoom: self.initial_zoom.normalized(),
            coordinates,
            ..self
        })
    }

    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            TimelineError::InvalidData(format!("failed to parse engine config json: {e}"))
        })?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            TimelineError::InvalidData(format!("failed to serialize engine config json: {e}"))
        })
    }
}

fn default_zoom_step_factor() -> f64 {
    1.5
}

fn default_current_age() -> f64 {
    25.0
}
