use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{TimelineError, TimelineResult};

/// Lowest age a declaration may be placed at.
pub const MIN_EVENT_AGE: f64 = 0.0;
/// Highest age a declaration (or its recurrence end) may reach.
pub const MAX_EVENT_AGE: f64 = 90.0;

/// Stable identifier of a declaration registered in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DeclarationId(pub u64);

impl fmt::Display for DeclarationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "decl-{}", self.0)
    }
}

/// Stable identifier of one concrete occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OccurrenceId(pub u64);

impl fmt::Display for OccurrenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "occ-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Income,
    Expense,
    Goal,
    Milestone,
}

impl EventType {
    /// Returns `true` for types drawn as fixed-size markers instead of
    /// amount-scaled bars.
    #[must_use]
    pub fn is_marker(self) -> bool {
        matches!(self, Self::Goal | Self::Milestone)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Goal => "goal",
            Self::Milestone => "milestone",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceFrequency {
    Monthly,
    Yearly,
}

impl RecurrenceFrequency {
    /// Number of occurrences emitted per year of recurrence.
    #[must_use]
    pub fn periods_per_year(self) -> u32 {
        match self {
            Self::Monthly => 12,
            Self::Yearly => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Recurrence {
    pub frequency: RecurrenceFrequency,
    pub end_age: f64,
}

impl Recurrence {
    #[must_use]
    pub fn new(frequency: RecurrenceFrequency, end_age: f64) -> Self {
        Self {
            frequency,
            end_age,
        }
    }

    #[must_use]
    pub fn monthly(end_age: f64) -> Self {
        Self::new(RecurrenceFrequency::Monthly, end_age)
    }

    #[must_use]
    pub fn yearly(end_age: f64) -> Self {
        Self::new(RecurrenceFrequency::Yearly, end_age)
    }
}

/// User-supplied event, possibly recurring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDeclaration {
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amount: f64,
    pub age: f64,
    #[serde(default)]
    pub recurrence: Option<Recurrence>,
}

impl EventDeclaration {
    #[must_use]
    pub fn new(event_type: EventType, title: impl Into<String>, age: f64) -> Self {
        Self {
            event_type,
            title: title.into(),
            description: String::new(),
            amount: 0.0,
            age,
            recurrence: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the amount from a decimal value, as received from form input.
    pub fn with_decimal_amount(mut self, amount: Decimal) -> TimelineResult<Self> {
        self.amount = decimal_to_f64(amount, "amount")?;
        Ok(self)
    }

    #[must_use]
    pub fn with_recurrence(mut self, recurrence: Recurrence) -> Self {
        self.recurrence = Some(recurrence);
        self
    }

    #[must_use]
    pub fn is_recurring(&self) -> bool {
        self.recurrence.is_some()
    }

    /// Checks the age, amount and recurrence invariants.
    ///
    /// Invariants:
    /// - `age` and `recurrence.end_age` are finite and within `[0, 90]`
    /// - `recurrence.end_age > age`
    /// - `amount` is finite and `>= 0`
    pub fn validate(&self) -> TimelineResult<()> {
        validate_age("age", self.age)?;

        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(TimelineError::InvalidAmount {
                amount: self.amount,
            });
        }

        if let Some(recurrence) = self.recurrence {
            validate_age("end_age", recurrence.end_age)?;
            if recurrence.end_age <= self.age {
                return Err(TimelineError::InvalidRecurrence {
                    age: self.age,
                    end_age: recurrence.end_age,
                });
            }
        }

        Ok(())
    }
}

fn validate_age(field: &'static str, value: f64) -> TimelineResult<()> {
    if !value.is_finite() || !(MIN_EVENT_AGE..=MAX_EVENT_AGE).contains(&value) {
        return Err(TimelineError::AgeOutOfRange { field, value });
    }
    Ok(())
}

/// Vertical side of the time axis an occurrence card is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Bottom,
}

impl Side {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }
}

/// Occurrence produced by recurrence expansion, before the engine assigns
/// identifiers and a side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccurrenceDraft {
    pub event_type: EventType,
    pub title: String,
    pub description: String,
    pub amount: f64,
    pub age: f64,
}

impl OccurrenceDraft {
    #[must_use]
    pub fn into_occurrence(
        self,
        id: OccurrenceId,
        declaration_id: DeclarationId,
        side: Side,
    ) -> Occurrence {
        Occurrence {
            id,
            declaration_id,
            event_type: self.event_type,
            title: self.title,
            description: self.description,
            amount: self.amount,
            age: self.age,
            side,
        }
    }
}

/// One concrete point on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Occurrence {
    pub id: OccurrenceId,
    pub declaration_id: DeclarationId,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub title: String,
    pub description: String,
    pub amount: f64,
    pub age: f64,
    pub side: Side,
}
