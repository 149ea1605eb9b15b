//! Optional feature modules live here.
//!
//! Keep extensions decoupled from the layout core: they consume engine
//! read-outs and never mutate engine state.

pub mod health_score;

pub use health_score::{HealthScore, HealthTier, health_score};
