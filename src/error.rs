use thiserror::Error;

use crate::core::{DeclarationId, OccurrenceId};

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("{field} must be within [0, 90], got {value}")]
    AgeOutOfRange { field: &'static str, value: f64 },

    #[error("recurrence end age must be greater than start age: age={age}, end_age={end_age}")]
    InvalidRecurrence { age: f64, end_age: f64 },

    #[error("amount must be finite and >= 0, got {amount}")]
    InvalidAmount { amount: f64 },

    #[error("event title must not be empty")]
    EmptyTitle,

    #[error("unknown declaration: {0}")]
    UnknownDeclaration(DeclarationId),

    #[error("unknown occurrence: {0}")]
    UnknownOccurrence(OccurrenceId),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl TimelineError {
    /// Returns `true` for errors raised by declaration validation.
    ///
    /// A validation failure means the declaration was rejected as a whole and
    /// no engine state was touched.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::AgeOutOfRange { .. }
                | Self::InvalidRecurrence { .. }
                | Self::InvalidAmount { .. }
                | Self::EmptyTitle
        )
    }
}
