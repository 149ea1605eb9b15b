//! timeline-rs: layout engine for age-indexed financial timelines.
//!
//! The crate turns income, expense, goal and milestone declarations into
//! concrete occurrences and maps them onto a zoomable age axis and a floored
//! amount axis. It produces numbers only; drawing is left to the host.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod telemetry;

pub use api::{TimelineEngine, TimelineEngineConfig};
pub use error::{TimelineError, TimelineResult};
