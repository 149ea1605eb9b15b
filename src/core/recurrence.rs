use crate::core::primitives::round_age;
use crate::core::types::{EventDeclaration, OccurrenceDraft};
use crate::error::TimelineResult;

/// Tolerance applied when comparing a stepped age against the end age.
const END_AGE_EPSILON: f64 = 1e-9;

/// Expands a declaration into its ordered occurrence ages.
///
/// Non-recurring declarations yield exactly `[age]`. Recurring ones yield
/// `age + k / periods_per_year` for every `k` that stays within `end_age`,
/// each rounded to two decimals and kept inside `[age, end_age]`. Every age
/// is computed from its index, never by repeated addition, so identical
/// input always yields an identical list.
pub fn expand_ages(declaration: &EventDeclaration) -> TimelineResult<Vec<f64>> {
    declaration.validate()?;

    let Some(recurrence) = declaration.recurrence else {
        return Ok(vec![declaration.age]);
    };

    let start = declaration.age;
    let end = recurrence.end_age;
    let periods = f64::from(recurrence.frequency.periods_per_year());
    let last_index = ((end - start) * periods + END_AGE_EPSILON).floor() as u64;

    let ages = (0..=last_index)
        .map(|k| {
            let age = start + (k as f64) / periods;
            round_age(age).clamp(start, end)
        })
        .collect();
    Ok(ages)
}

/// Expands a declaration into occurrence drafts.
///
/// Identifiers and sides are assigned by the caller.
pub fn expand_recurrence(declaration: &EventDeclaration) -> TimelineResult<Vec<OccurrenceDraft>> {
    let ages = expand_ages(declaration)?;
    Ok(ages
        .into_iter()
        .map(|age| OccurrenceDraft {
            event_type: declaration.event_type,
            title: declaration.title.clone(),
            description: declaration.description.clone(),
            amount: declaration.amount,
            age,
        })
        .collect())
}
