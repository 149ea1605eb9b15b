use serde::{Deserialize, Serialize};

use crate::core::{
    AmountAxis, AxisLabel, DeclarationId, EventType, Occurrence, OccurrenceId, PixelGeometry, Side,
    generate_labels_with_config, map_all, pixels_per_year,
};

use super::TimelineEngine;
use super::amount_format::format_compact_currency;

/// Layout result for a single occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccurrenceLayout {
    pub id: OccurrenceId,
    pub declaration_id: DeclarationId,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub age: f64,
    pub amount: f64,
    pub side: Side,
    pub geometry: PixelGeometry,
    /// Whether `age` falls inside the current zoom window.
    pub visible: bool,
}

/// Amount-axis tick with display text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmountAxisTick {
    pub amount: f64,
    pub position_percent: f64,
    pub text: String,
}

impl TimelineEngine {
    /// Amount axis recomputed from the current occurrence list.
    #[must_use]
    pub fn amount_axis(&self) -> AmountAxis {
        AmountAxis::from_amounts(self.occurrences.values().map(|occurrence| occurrence.amount))
    }

    #[must_use]
    pub fn amount_axis_ticks(&self) -> Vec<AmountAxisTick> {
        self.amount_axis()
            .labels
            .into_iter()
            .map(|label| AmountAxisTick {
                amount: label.amount,
                position_percent: label.position_percent,
                text: format_compact_currency(label.amount),
            })
            .collect()
    }

    /// Pixel layout of every occurrence, in insertion order.
    ///
    /// Occurrences outside the window are kept and flagged `visible = false`.
    #[must_use]
    pub fn layout(&self) -> Vec<OccurrenceLayout> {
        let axis_max = self.amount_axis().max;
        let occurrences: Vec<&Occurrence> = self.occurrences.values().collect();
        let geometry = map_all(&occurrences, self.zoom, axis_max, self.config.coordinates);

        occurrences
            .into_iter()
            .zip(geometry)
            .map(|(occurrence, geometry)| OccurrenceLayout {
                id: occurrence.id,
                declaration_id: occurrence.declaration_id,
                event_type: occurrence.event_type,
                age: occurrence.age,
                amount: occurrence.amount,
                side: occurrence.side,
                geometry,
                visible: self.zoom.contains(occurrence.age),
            })
            .collect()
    }

    /// Time-axis ticks for the current zoom window.
    #[must_use]
    pub fn axis_labels(&self) -> Vec<AxisLabel> {
        generate_labels_with_config(self.zoom, self.config.axis_labels)
    }

    /// Width in pixels of the whole visible window at the current zoom.
    #[must_use]
    pub fn window_width_px(&self) -> f64 {
        self.zoom.span() * pixels_per_year(self.zoom, self.config.coordinates)
    }
}
