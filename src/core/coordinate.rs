use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-layout")]
use rayon::prelude::*;

use crate::core::primitives::clamp_finite;
use crate::core::scale::LinearScale;
use crate::core::types::{EventType, MAX_EVENT_AGE, MIN_EVENT_AGE, Occurrence};
use crate::core::zoom::ZoomState;
use crate::error::{TimelineError, TimelineResult};

/// Fixed constants of the pixel mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoordinateConfig {
    /// Horizontal pixels per year at zoom level 1.
    pub base_pixels_per_year: f64,
    pub min_height_px: f64,
    pub max_height_px: f64,
    /// Axis share (percent) mapped to `min_height_px`.
    pub min_amount_threshold_percent: f64,
    /// Axis share (percent) mapped to `max_height_px`.
    pub max_amount_threshold_percent: f64,
    /// Size of goal/milestone markers, independent of amount.
    pub marker_size_px: f64,
}

impl Default for CoordinateConfig {
    fn default() -> Self {
        Self {
            base_pixels_per_year: 40.0,
            min_height_px: 40.0,
            max_height_px: 300.0,
            min_amount_threshold_percent: 0.0,
            max_amount_threshold_percent: 100.0,
            marker_size_px: 24.0,
        }
    }
}

impl CoordinateConfig {
    pub fn validate(self) -> TimelineResult<Self> {
        for (value, name) in [
            (self.base_pixels_per_year, "base_pixels_per_year"),
            (self.min_height_px, "min_height_px"),
            (self.max_height_px, "max_height_px"),
            (self.marker_size_px, "marker_size_px"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TimelineError::InvalidData(format!(
                    "coordinate config `{name}` must be finite and > 0"
                )));
            }
        }

        if self.min_height_px > self.max_height_px {
            return Err(TimelineError::InvalidData(
                "coordinate config min height must be <= max height".to_owned(),
            ));
        }

        if !self.min_amount_threshold_percent.is_finite()
            || !self.max_amount_threshold_percent.is_finite()
            || self.min_amount_threshold_percent >= self.max_amount_threshold_percent
        {
            return Err(TimelineError::InvalidData(
                "coordinate config amount thresholds must be finite and increasing".to_owned(),
            ));
        }

        Ok(self)
    }
}

/// Which way an occurrence grows from the time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    /// Fixed-size marker centered on the axis.
    Marker,
}

impl Direction {
    #[must_use]
    pub fn for_type(event_type: EventType) -> Self {
        match event_type {
            EventType::Income => Self::Up,
            EventType::Expense => Self::Down,
            EventType::Goal | EventType::Milestone => Self::Marker,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelGeometry {
    pub x: f64,
    pub height: f64,
    /// Amount as a percentage of the amount-axis maximum.
    pub height_percent: f64,
    pub direction: Direction,
}

#[must_use]
pub fn pixels_per_year(zoom: ZoomState, config: CoordinateConfig) -> f64 {
    config.base_pixels_per_year * zoom.zoom_level()
}

/// Horizontal offset of `age` from the window start.
///
/// Ages outside the window are not discarded: the result may be negative or
/// exceed the viewport width.
#[must_use]
pub fn age_to_x(age: f64, zoom: ZoomState, config: CoordinateConfig) -> f64 {
    let age = clamp_finite(age, MIN_EVENT_AGE, MAX_EVENT_AGE, zoom.window_start());
    (age - zoom.window_start()) * pixels_per_year(zoom, config)
}

/// Inverse of [`age_to_x`], used to resolve gesture focal points.
#[must_use]
pub fn x_to_age(x: f64, zoom: ZoomState, config: CoordinateConfig) -> f64 {
    if !x.is_finite() {
        return zoom.window_start();
    }
    zoom.window_start() + x / pixels_per_year(zoom, config)
}

/// Bar height for `amount` against an amount axis topping out at `axis_max`.
#[must_use]
pub fn amplitude_height(amount: f64, axis_max: f64, config: CoordinateConfig) -> f64 {
    let percent = height_percent(amount, axis_max);
    let scaled = match LinearScale::new(
        config.min_amount_threshold_percent,
        config.max_amount_threshold_percent,
    ) {
        Ok(scale) => scale.normalize_clamped(percent),
        Err(_) if percent >= config.max_amount_threshold_percent => 1.0,
        Err(_) => 0.0,
    };
    config.min_height_px + scaled * (config.max_height_px - config.min_height_px)
}

/// Maps a typed `(age, amount)` pair to pixel geometry.
#[must_use]
pub fn map_point(
    event_type: EventType,
    age: f64,
    amount: f64,
    zoom: ZoomState,
    axis_max: f64,
    config: CoordinateConfig,
) -> PixelGeometry {
    let direction = Direction::for_type(event_type);
    let height = match direction {
        Direction::Marker => config.marker_size_px,
        Direction::Up | Direction::Down => amplitude_height(amount, axis_max, config),
    };

    PixelGeometry {
        x: age_to_x(age, zoom, config),
        height,
        height_percent: height_percent(amount, axis_max),
        direction,
    }
}

#[must_use]
pub fn map_to_pixels(
    occurrence: &Occurrence,
    zoom: ZoomState,
    axis_max: f64,
    config: CoordinateConfig,
) -> PixelGeometry {
    map_point(
        occurrence.event_type,
        occurrence.age,
        occurrence.amount,
        zoom,
        axis_max,
        config,
    )
}

/// Maps every occurrence, preserving input order.
#[must_use]
pub fn map_all(
    occurrences: &[&Occurrence],
    zoom: ZoomState,
    axis_max: f64,
    config: CoordinateConfig,
) -> Vec<PixelGeometry> {
    #[cfg(feature = "parallel-layout")]
    {
        occurrences
            .par_iter()
            .map(|occurrence| map_to_pixels(occurrence, zoom, axis_max, config))
            .collect()
    }

    #[cfg(not(feature = "parallel-layout"))]
    {
        occurrences
            .iter()
            .map(|occurrence| map_to_pixels(occurrence, zoom, axis_max, config))
            .collect()
    }
}

fn height_percent(amount: f64, axis_max: f64) -> f64 {
    if !amount.is_finite() || !axis_max.is_finite() || axis_max <= 0.0 {
        return 0.0;
    }
    amount / axis_max * 100.0
}
