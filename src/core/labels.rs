use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::core::zoom::ZoomState;

/// Widest window (years) that still gets monthly ticks.
pub const MONTHLY_LABEL_MAX_SPAN: f64 = 2.0;
/// Lowest zoom level that gets monthly ticks.
pub const MONTHLY_LABEL_MIN_ZOOM: f64 = 6.0;
/// Yearly ticks are major every this many years.
pub const MAJOR_YEAR_INTERVAL: i64 = 5;

const MONTH_INDEX_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisLabelConfig {
    /// When set, January ticks show `birth_year + age` instead of the age.
    #[serde(default)]
    pub birth_year: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelGranularity {
    Yearly,
    Monthly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub age: f64,
    pub text: String,
    pub is_major: bool,
    /// Offset from the window start as a share of the window span.
    pub position_percent: f64,
}

#[must_use]
pub fn label_granularity(zoom: ZoomState) -> LabelGranularity {
    if zoom.span() <= MONTHLY_LABEL_MAX_SPAN && zoom.zoom_level() >= MONTHLY_LABEL_MIN_ZOOM {
        LabelGranularity::Monthly
    } else {
        LabelGranularity::Yearly
    }
}

#[must_use]
pub fn generate_labels(zoom: ZoomState) -> Vec<AxisLabel> {
    generate_labels_with_config(zoom, AxisLabelConfig::default())
}

/// Builds the ordered tick labels for the visible window.
///
/// Windows of at most two years at zoom level 6 or more get one tick per
/// month (January ticks are major and show the year). Everything else gets
/// one tick per whole year, major every five years.
#[must_use]
pub fn generate_labels_with_config(zoom: ZoomState, config: AxisLabelConfig) -> Vec<AxisLabel> {
    match label_granularity(zoom) {
        LabelGranularity::Monthly => monthly_labels(zoom, config),
        LabelGranularity::Yearly => yearly_labels(zoom),
    }
}

fn yearly_labels(zoom: ZoomState) -> Vec<AxisLabel> {
    let first = zoom.window_start().floor() as i64;
    let last = zoom.window_end().ceil() as i64;

    (first..=last)
        .map(|year| {
            let age = year as f64;
            AxisLabel {
                age,
                text: year.to_string(),
                is_major: year.rem_euclid(MAJOR_YEAR_INTERVAL) == 0,
                position_percent: position_percent(age, zoom),
            }
        })
        .collect()
}

fn monthly_labels(zoom: ZoomState, config: AxisLabelConfig) -> Vec<AxisLabel> {
    let first = (zoom.window_start() * 12.0 - MONTH_INDEX_EPSILON).ceil() as i64;
    let last = (zoom.window_end() * 12.0 + MONTH_INDEX_EPSILON).floor() as i64;

    (first..=last)
        .map(|month_ordinal| {
            let age = month_ordinal as f64 / 12.0;
            let month_index = month_ordinal.rem_euclid(12);
            let is_major = month_index == 0;
            let text = if is_major {
                let whole_age = month_ordinal.div_euclid(12);
                match config.birth_year {
                    Some(birth_year) => (i64::from(birth_year) + whole_age).to_string(),
                    None => whole_age.to_string(),
                }
            } else {
                month_abbreviation(month_index).to_owned()
            };

            AxisLabel {
                age,
                text,
                is_major,
                position_percent: position_percent(age, zoom),
            }
        })
        .collect()
}

fn month_abbreviation(month_index: i64) -> &'static str {
    u8::try_from(month_index + 1)
        .ok()
        .and_then(|number| Month::try_from(number).ok())
        .map_or("", |month| &month.name()[..3])
}

fn position_percent(age: f64, zoom: ZoomState) -> f64 {
    (age - zoom.window_start()) / zoom.span() * 100.0
}
