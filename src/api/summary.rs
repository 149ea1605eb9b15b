use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::EventType;

use super::TimelineEngine;
use super::amount_format::format_signed_compact_currency;

/// Headline figures shown next to the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSummary {
    pub declaration_count: usize,
    pub occurrence_count: usize,
    /// Youngest and oldest occurrence age, `None` on an empty timeline.
    pub age_span: Option<(f64, f64)>,
    pub total_income: f64,
    pub total_expense: f64,
    /// `total_income - total_expense`.
    pub net_projection: f64,
}

impl TimelineSummary {
    /// Age span display text, e.g. `21-30 yrs`.
    #[must_use]
    pub fn age_span_text(&self) -> String {
        match self.age_span {
            Some((first, last)) => format!("{}-{} yrs", first.floor(), last.ceil()),
            None => "-".to_owned(),
        }
    }

    /// Net projection display text, e.g. `+$425k`.
    #[must_use]
    pub fn net_projection_text(&self) -> String {
        format_signed_compact_currency(self.net_projection)
    }
}

impl TimelineEngine {
    #[must_use]
    pub fn summary(&self) -> TimelineSummary {
        let ages = || self.occurrences.values().map(|occurrence| OrderedFloat(occurrence.age));
        let age_span = ages().min().zip(ages().max()).map(|(min, max)| (min.0, max.0));

        let total_for = |event_type: EventType| -> f64 {
            self.occurrences
                .values()
                .filter(|occurrence| occurrence.event_type == event_type)
                .map(|occurrence| occurrence.amount)
                .sum()
        };
        let total_income = total_for(EventType::Income);
        let total_expense = total_for(EventType::Expense);

        TimelineSummary {
            declaration_count: self.declarations.len(),
            occurrence_count: self.occurrences.len(),
            age_span,
            total_income,
            total_expense,
            net_projection: total_income - total_expense,
        }
    }
}
