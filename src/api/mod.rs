mod amount_format;
mod engine;
mod engine_config;
mod engine_snapshot;
mod event_controller;
mod layout_projection;
mod sample_timeline;
mod summary;
mod validation;
mod zoom_controller;

pub use amount_format::{format_compact_currency, format_currency, format_signed_compact_currency};
pub use engine::{DeclarationRecord, TimelineEngine};
pub use engine_config::TimelineEngineConfig;
pub use engine_snapshot::{
    DeclarationSnapshot, ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot,
    EngineSnapshotJsonContractV1,
};
pub use layout_projection::{AmountAxisTick, OccurrenceLayout};
pub use sample_timeline::sample_declarations;
pub use summary::TimelineSummary;
