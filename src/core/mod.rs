pub mod amount_axis;
pub mod coordinate;
pub mod labels;
pub mod placement;
pub mod primitives;
pub mod recurrence;
pub mod scale;
pub mod types;
pub mod zoom;

pub use amount_axis::{
    AMOUNT_AXIS_BANDS, AMOUNT_AXIS_FLOOR, AmountAxis, AmountLabel, compute_amount_axis,
};
pub use coordinate::{
    CoordinateConfig, Direction, PixelGeometry, age_to_x, amplitude_height, map_all, map_point,
    map_to_pixels, pixels_per_year, x_to_age,
};
pub use labels::{
    AxisLabel, AxisLabelConfig, LabelGranularity, generate_labels, generate_labels_with_config,
    label_granularity,
};
pub use placement::{PlacementResolver, SideStrategy, side_for_type};
pub use recurrence::{expand_ages, expand_recurrence};
pub use scale::LinearScale;
pub use types::{
    DeclarationId, EventDeclaration, EventType, MAX_EVENT_AGE, MIN_EVENT_AGE, Occurrence,
    OccurrenceDraft, OccurrenceId, Recurrence, RecurrenceFrequency, Side,
};
pub use zoom::{
    MAX_WINDOW_AGE, MAX_ZOOM_LEVEL, MIN_WINDOW_AGE, MIN_WINDOW_SPAN, MIN_ZOOM_LEVEL, ZoomState,
    zoom,
};
