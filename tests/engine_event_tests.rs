use approx::assert_abs_diff_eq;
use timeline_rs::TimelineError;
use timeline_rs::api::{TimelineEngine, TimelineEngineConfig, sample_declarations};
use timeline_rs::core::{
    AMOUNT_AXIS_FLOOR, DeclarationId, EventDeclaration, EventType, OccurrenceId, Recurrence, Side,
};

fn engine() -> TimelineEngine {
    TimelineEngine::new(TimelineEngineConfig::default()).expect("engine init")
}

#[test]
fn sample_declarations_load_one_occurrence_each() {
    let engine = TimelineEngine::with_declarations(
        TimelineEngineConfig::default(),
        sample_declarations(),
    )
    .expect("sample timeline");

    assert_eq!(engine.declaration_count(), 4);
    assert_eq!(engine.occurrence_count(), 4);

    let titles: Vec<&str> = engine
        .occurrences()
        .map(|occurrence| occurrence.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec!["First Job", "Graduation", "Buy a House", "Car Purchase"]
    );

    let sides: Vec<Side> = engine.declarations().map(|(_, record)| record.side).collect();
    assert_eq!(sides, vec![Side::Top, Side::Top, Side::Bottom, Side::Bottom]);
}

#[test]
fn recurring_declaration_expands_and_removes_as_a_unit() {
    let mut engine = engine();
    let job = engine
        .add_event(EventDeclaration::new(EventType::Income, "Job", 25.0).with_amount(60_000.0))
        .expect("valid job");
    let rent = engine
        .add_event(
            EventDeclaration::new(EventType::Expense, "Rent", 30.0)
                .with_amount(1_500.0)
                .with_recurrence(Recurrence::monthly(31.0)),
        )
        .expect("valid rent");

    let record = engine.declaration(rent).expect("rent record");
    assert_eq!(record.occurrence_ids().len(), 13);
    assert_eq!(engine.occurrence_count(), 14);
    let expected_ids = record.occurrence_ids().to_vec();

    let removed = engine.remove_declaration(rent).expect("remove rent");
    assert_eq!(removed, expected_ids);
    assert_eq!(engine.occurrence_count(), 1);
    assert!(engine.declaration(rent).is_none());
    assert!(engine.declaration(job).is_some());
    assert!(removed.iter().all(|id| engine.occurrence(*id).is_none()));
}

#[test]
fn rejected_declaration_leaves_engine_untouched() {
    let mut engine = engine();
    engine
        .add_event(EventDeclaration::new(EventType::Goal, "Savings", 28.0))
        .expect("valid goal");

    let too_old = EventDeclaration::new(EventType::Income, "Pension", 95.0);
    assert!(matches!(
        engine.add_event(too_old),
        Err(TimelineError::AgeOutOfRange { field: "age", .. })
    ));

    let inverted = EventDeclaration::new(EventType::Expense, "Loan", 40.0)
        .with_recurrence(Recurrence::yearly(35.0));
    assert!(matches!(
        engine.add_event(inverted),
        Err(TimelineError::InvalidRecurrence { .. })
    ));

    let untitled = EventDeclaration::new(EventType::Milestone, "   ", 30.0);
    assert!(matches!(
        engine.add_event(untitled),
        Err(TimelineError::EmptyTitle)
    ));

    assert_eq!(engine.declaration_count(), 1);
    assert_eq!(engine.occurrence_count(), 1);

    let next = engine
        .add_event(EventDeclaration::new(EventType::Goal, "House", 32.0))
        .expect("valid goal");
    assert_eq!(next, DeclarationId(2));
}

#[test]
fn unknown_identifiers_are_reported() {
    let mut engine = engine();

    assert!(matches!(
        engine.remove_declaration(DeclarationId(7)),
        Err(TimelineError::UnknownDeclaration(DeclarationId(7)))
    ));
    assert!(matches!(
        engine.remove_occurrence(OccurrenceId(3)),
        Err(TimelineError::UnknownOccurrence(OccurrenceId(3)))
    ));
}

#[test]
fn removing_last_occurrence_drops_its_declaration() {
    let mut engine = engine();
    let bonus = engine
        .add_event(
            EventDeclaration::new(EventType::Income, "Bonus", 30.0)
                .with_amount(5_000.0)
                .with_recurrence(Recurrence::yearly(31.0)),
        )
        .expect("valid bonus");
    let ids = engine.declaration(bonus).expect("bonus").occurrence_ids().to_vec();
    assert_eq!(ids.len(), 2);

    let first = engine.remove_occurrence(ids[0]).expect("remove first");
    assert_eq!(first.age, 30.0);
    assert_eq!(
        engine.declaration(bonus).expect("still present").occurrence_ids(),
        &ids[1..]
    );

    engine.remove_occurrence(ids[1]).expect("remove second");
    assert!(engine.declaration(bonus).is_none());
    assert_eq!(engine.declaration_count(), 0);
}

#[test]
fn identifiers_are_not_reused_after_clear() {
    let mut engine = engine();
    engine
        .add_event(EventDeclaration::new(EventType::Goal, "Trip", 27.0))
        .expect("valid goal");
    engine.clear_events();
    assert_eq!(engine.declaration_count(), 0);
    assert_eq!(engine.occurrence_count(), 0);

    let next = engine
        .add_event(EventDeclaration::new(EventType::Goal, "Trip", 27.0))
        .expect("valid goal");
    assert_eq!(next, DeclarationId(2));
    assert_eq!(
        engine.declaration(next).expect("trip").occurrence_ids(),
        &[OccurrenceId(2)]
    );
}

#[test]
fn amount_axis_follows_current_occurrences() {
    let mut engine = engine();
    assert_eq!(engine.amount_axis().max, AMOUNT_AXIS_FLOOR);

    let inheritance = engine
        .add_event(
            EventDeclaration::new(EventType::Income, "Inheritance", 45.0).with_amount(250_000.0),
        )
        .expect("valid income");
    assert_eq!(engine.amount_axis().max, 250_000.0);

    let ticks = engine.amount_axis_ticks();
    let texts: Vec<&str> = ticks.iter().map(|tick| tick.text.as_str()).collect();
    assert_eq!(texts, vec!["$0", "$50k", "$100k", "$150k", "$200k", "$250k"]);

    engine.remove_declaration(inheritance).expect("remove");
    assert_eq!(engine.amount_axis().max, AMOUNT_AXIS_FLOOR);
}

#[test]
fn layout_flags_out_of_window_occurrences() {
    let mut engine = engine();
    engine
        .add_event(EventDeclaration::new(EventType::Milestone, "Retirement", 80.0))
        .expect("valid milestone");
    engine
        .add_event(EventDeclaration::new(EventType::Income, "Raise", 40.0).with_amount(50_000.0))
        .expect("valid income");

    let layout = engine.layout();
    assert_eq!(layout.len(), 2);

    assert!(!layout[0].visible);
    assert_eq!(layout[0].geometry.x, 2_600.0);

    assert!(layout[1].visible);
    assert_eq!(layout[1].geometry.x, 1_000.0);
    assert_eq!(layout[1].geometry.height, 170.0);
    assert_abs_diff_eq!(engine.window_width_px(), 2_200.0, epsilon = 1e-9);
}

#[test]
fn occurrences_by_age_are_sorted() {
    let engine = TimelineEngine::with_declarations(
        TimelineEngineConfig::default(),
        sample_declarations(),
    )
    .expect("sample timeline");

    let ages: Vec<f64> = engine
        .occurrences_by_age()
        .iter()
        .map(|occurrence| occurrence.age)
        .collect();
    assert_eq!(ages, vec![21.0, 22.0, 26.0, 30.0]);
}
