use crate::core::{EventDeclaration, MAX_EVENT_AGE, MIN_EVENT_AGE};
use crate::error::{TimelineError, TimelineResult};

/// Full input check run before a declaration is admitted into the engine.
pub(super) fn validate_declaration(declaration: &EventDeclaration) -> TimelineResult<()> {
    if declaration.title.trim().is_empty() {
        return Err(TimelineError::EmptyTitle);
    }
    declaration.validate()
}

pub(super) fn validate_zoom_step_factor(factor: f64) -> TimelineResult<f64> {
    if !factor.is_finite() || factor <= 1.0 {
        return Err(TimelineError::InvalidData(
            "zoom step factor must be finite and > 1".to_owned(),
        ));
    }
    Ok(factor)
}

pub(super) fn validate_current_age(age: f64) -> TimelineResult<f64> {
    if !age.is_finite() || !(MIN_EVENT_AGE..=MAX_EVENT_AGE).contains(&age) {
        return Err(TimelineError::InvalidData(
            "current age must be within [0, 90]".to_owned(),
        ));
    }
    Ok(age)
}
