use crate::core::{EventDeclaration, EventType};

/// Demonstration timeline shown to first-time users.
#[must_use]
pub fn sample_declarations() -> Vec<EventDeclaration> {
    vec![
        EventDeclaration::new(EventType::Income, "First Job", 22.0)
            .with_description("Started career at Tech Company")
            .with_amount(60_000.0),
        EventDeclaration::new(EventType::Milestone, "Graduation", 21.0)
            .with_description("Graduated with Bachelor's degree"),
        EventDeclaration::new(EventType::Goal, "Buy a House", 30.0)
            .with_description("Purchase first home")
            .with_amount(300_000.0),
        EventDeclaration::new(EventType::Expense, "Car Purchase", 26.0)
            .with_description("New vehicle")
            .with_amount(25_000.0),
    ]
}
