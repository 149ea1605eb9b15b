use timeline_rs::core::{
    AxisLabelConfig, LabelGranularity, ZoomState, generate_labels, generate_labels_with_config,
    label_granularity,
};

#[test]
fn narrow_window_at_high_zoom_emits_monthly_labels() {
    let zoom = ZoomState::new(12.0, 20.0, 22.0);
    assert_eq!(label_granularity(zoom), LabelGranularity::Monthly);

    let labels = generate_labels(zoom);
    assert_eq!(labels.len(), 25);

    let texts: Vec<&str> = labels.iter().take(13).map(|label| label.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "20", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            "21"
        ]
    );

    let majors: Vec<f64> = labels
        .iter()
        .filter(|label| label.is_major)
        .map(|label| label.age)
        .collect();
    assert_eq!(majors, vec![20.0, 21.0, 22.0]);
}

#[test]
fn wide_window_emits_yearly_labels_with_five_year_majors() {
    let zoom = ZoomState::new(1.0, 20.0, 50.0);
    assert_eq!(label_granularity(zoom), LabelGranularity::Yearly);

    let labels = generate_labels(zoom);
    assert_eq!(labels.len(), 31);
    assert_eq!(labels.first().map(|label| label.age), Some(20.0));
    assert_eq!(labels.last().map(|label| label.age), Some(50.0));

    let majors: Vec<f64> = labels
        .iter()
        .filter(|label| label.is_major)
        .map(|label| label.age)
        .collect();
    assert_eq!(majors, vec![20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0]);
    assert!(labels.iter().all(|label| label.text == format!("{}", label.age as i64)));
}

#[test]
fn narrow_window_at_low_zoom_stays_yearly() {
    let zoom = ZoomState::new(4.0, 20.0, 22.0);
    assert_eq!(label_granularity(zoom), LabelGranularity::Yearly);

    let ages: Vec<f64> = generate_labels(zoom).iter().map(|label| label.age).collect();
    assert_eq!(ages, vec![20.0, 21.0, 22.0]);
}

#[test]
fn high_zoom_with_wide_window_stays_yearly() {
    let zoom = ZoomState::new(12.0, 20.0, 23.0);
    assert_eq!(label_granularity(zoom), LabelGranularity::Yearly);
}

#[test]
fn fractional_yearly_window_rounds_outwards() {
    let zoom = ZoomState::new(1.0, 20.4, 24.6);
    let ages: Vec<f64> = generate_labels(zoom).iter().map(|label| label.age).collect();
    assert_eq!(ages, vec![20.0, 21.0, 22.0, 23.0, 24.0, 25.0]);
}

#[test]
fn fractional_monthly_window_starts_at_next_month() {
    let zoom = ZoomState::new(8.0, 20.5, 22.0);
    let labels = generate_labels(zoom);

    assert_eq!(labels[0].text, "Jul");
    assert_eq!(labels[0].age, 20.5);
    assert!(!labels[0].is_major);
    assert_eq!(labels.len(), 19);
}

#[test]
fn birth_year_replaces_january_text() {
    let zoom = ZoomState::new(12.0, 20.0, 22.0);
    let labels = generate_labels_with_config(
        zoom,
        AxisLabelConfig {
            birth_year: Some(1990),
        },
    );

    let january_texts: Vec<&str> = labels
        .iter()
        .filter(|label| label.is_major)
        .map(|label| label.text.as_str())
        .collect();
    assert_eq!(january_texts, vec!["2010", "2011", "2012"]);
}

#[test]
fn positions_span_the_window() {
    let labels = generate_labels(ZoomState::new(12.0, 20.0, 22.0));
    assert_eq!(labels.first().map(|label| label.position_percent), Some(0.0));
    assert_eq!(labels.last().map(|label| label.position_percent), Some(100.0));
    assert!(
        labels
            .windows(2)
            .all(|pair| pair[0].position_percent < pair[1].position_percent)
    );
}

#[test]
fn regeneration_is_stable() {
    let zoom = ZoomState::new(9.0, 33.2, 34.9);
    assert_eq!(generate_labels(zoom), generate_labels(zoom));
}
