use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{TimelineError, TimelineResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> TimelineResult<f64> {
    value.to_f64().ok_or_else(|| {
        TimelineError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Rounds an age to two decimal places.
#[must_use]
pub fn round_age(age: f64) -> f64 {
    (age * 100.0).round() / 100.0
}

/// Clamps `value` into `[min, max]`, mapping non-finite input to `fallback`.
#[must_use]
pub fn clamp_finite(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}
