use approx::assert_abs_diff_eq;
use timeline_rs::TimelineError;
use timeline_rs::core::{
    CoordinateConfig, DeclarationId, Direction, EventType, Occurrence, OccurrenceId, Side,
    ZoomState, age_to_x, amplitude_height, map_point, map_to_pixels, pixels_per_year, x_to_age,
};

#[test]
fn x_is_offset_from_window_start_in_pixels_per_year() {
    let config = CoordinateConfig::default();
    let zoom = ZoomState::default();

    assert_eq!(pixels_per_year(zoom, config), 40.0);
    assert_eq!(age_to_x(22.0, zoom, config), 280.0);
    assert_eq!(age_to_x(15.0, zoom, config), 0.0);
}

#[test]
fn zoom_level_scales_pixels_per_year() {
    let config = CoordinateConfig::default();
    let zoom = ZoomState::new(2.0, 20.0, 40.0);

    assert_eq!(pixels_per_year(zoom, config), 80.0);
    assert_eq!(age_to_x(25.0, zoom, config), 400.0);
}

#[test]
fn ages_outside_window_keep_well_defined_coordinates() {
    let config = CoordinateConfig::default();
    let zoom = ZoomState::new(1.0, 20.0, 30.0);

    assert_eq!(age_to_x(10.0, zoom, config), -400.0);
    assert_eq!(age_to_x(80.0, zoom, config), 2_400.0);
}

#[test]
fn x_to_age_inverts_age_to_x() {
    let config = CoordinateConfig::default();
    let zoom = ZoomState::new(3.5, 31.25, 38.0);

    for age in [20.0, 31.25, 33.33, 37.9, 60.0] {
        let x = age_to_x(age, zoom, config);
        assert_abs_diff_eq!(x_to_age(x, zoom, config), age, epsilon = 1e-9);
    }
}

#[test]
fn income_grows_up_and_expense_grows_down() {
    let config = CoordinateConfig::default();
    let zoom = ZoomState::default();

    let income = map_point(EventType::Income, 30.0, 50_000.0, zoom, 100_000.0, config);
    let expense = map_point(EventType::Expense, 30.0, 50_000.0, zoom, 100_000.0, config);

    assert_eq!(income.direction, Direction::Up);
    assert_eq!(expense.direction, Direction::Down);
    assert_eq!(income.height, 170.0);
    assert_eq!(expense.height, 170.0);
    assert_eq!(income.height_percent, 50.0);
}

#[test]
fn amplitude_spans_min_to_max_height() {
    let config = CoordinateConfig::default();

    assert_eq!(amplitude_height(0.0, 100_000.0, config), 40.0);
    assert_eq!(amplitude_height(100_000.0, 100_000.0, config), 300.0);
    assert_eq!(amplitude_height(250_000.0, 100_000.0, config), 300.0);
}

#[test]
fn zero_axis_maximum_falls_back_to_min_height() {
    let config = CoordinateConfig::default();

    let geometry = map_point(EventType::Income, 30.0, 10_000.0, ZoomState::default(), 0.0, config);
    assert_eq!(geometry.height, config.min_height_px);
    assert_eq!(geometry.height_percent, 0.0);
}

#[test]
fn goals_and_milestones_use_fixed_marker_size() {
    let config = CoordinateConfig::default();
    let zoom = ZoomState::default();

    for event_type in [EventType::Goal, EventType::Milestone] {
        let small = map_point(event_type, 30.0, 0.0, zoom, 100_000.0, config);
        let large = map_point(event_type, 30.0, 300_000.0, zoom, 300_000.0, config);
        assert_eq!(small.direction, Direction::Marker);
        assert_eq!(small.height, config.marker_size_px);
        assert_eq!(large.height, config.marker_size_px);
    }
}

#[test]
fn side_does_not_affect_geometry() {
    let config = CoordinateConfig::default();
    let zoom = ZoomState::new(2.0, 25.0, 45.0);
    let mut occurrence = Occurrence {
        id: OccurrenceId(1),
        declaration_id: DeclarationId(1),
        event_type: EventType::Income,
        title: "Bonus".to_owned(),
        description: String::new(),
        amount: 12_000.0,
        age: 33.5,
        side: Side::Top,
    };

    let top = map_to_pixels(&occurrence, zoom, 100_000.0, config);
    occurrence.side = Side::Bottom;
    let bottom = map_to_pixels(&occurrence, zoom, 100_000.0, config);

    assert_eq!(top, bottom);
    assert_eq!(top.direction, Direction::Up);
}

#[test]
fn mapping_is_pure() {
    let config = CoordinateConfig::default();
    let zoom = ZoomState::new(7.0, 40.0, 44.0);

    let first = map_point(EventType::Expense, 41.17, 8_250.0, zoom, 180_000.0, config);
    let second = map_point(EventType::Expense, 41.17, 8_250.0, zoom, 180_000.0, config);
    assert_eq!(first, second);
}

#[test]
fn custom_thresholds_shift_the_height_curve() {
    let config = CoordinateConfig {
        min_amount_threshold_percent: 10.0,
        max_amount_threshold_percent: 60.0,
        ..CoordinateConfig::default()
    };

    assert_eq!(amplitude_height(5_000.0, 100_000.0, config), 40.0);
    assert_eq!(amplitude_height(35_000.0, 100_000.0, config), 170.0);
    assert_eq!(amplitude_height(80_000.0, 100_000.0, config), 300.0);
}

#[test]
fn invalid_coordinate_config_is_rejected() {
    let inverted = CoordinateConfig {
        min_height_px: 400.0,
        ..CoordinateConfig::default()
    };
    assert!(matches!(
        inverted.validate(),
        Err(TimelineError::InvalidData(_))
    ));

    let flat_thresholds = CoordinateConfig {
        min_amount_threshold_percent: 50.0,
        max_amount_threshold_percent: 50.0,
        ..CoordinateConfig::default()
    };
    assert!(flat_thresholds.validate().is_err());

    let zero_scale = CoordinateConfig {
        base_pixels_per_year: 0.0,
        ..CoordinateConfig::default()
    };
    assert!(zero_scale.validate().is_err());

    assert!(CoordinateConfig::default().validate().is_ok());
}
