use tracing::{debug, trace};

use crate::core::{ZoomState, x_to_age};

use super::TimelineEngine;

impl TimelineEngine {
    /// Zooms in by one configured step around the window center.
    pub fn zoom_in(&mut self) -> ZoomState {
        self.zoom_by(self.config.zoom_step_factor)
    }

    /// Zooms out by one configured step around the window center.
    pub fn zoom_out(&mut self) -> ZoomState {
        self.zoom_by(1.0 / self.config.zoom_step_factor)
    }

    /// Zooms around the window center by an arbitrary factor.
    ///
    /// Invalid factors are ignored; the result is always a valid window.
    pub fn zoom_by(&mut self, factor: f64) -> ZoomState {
        let next = self.zoom.zoom(factor);
        self.apply_zoom(next, "zoom by factor")
    }

    /// Zooms while holding `anchor_age` at the same relative position.
    pub fn zoom_at(&mut self, factor: f64, anchor_age: f64) -> ZoomState {
        let next = self.zoom.zoom_at(factor, anchor_age);
        self.apply_zoom(next, "zoom at anchor")
    }

    /// Zooms around the age under pixel `anchor_x`, e.g. a wheel gesture.
    pub fn zoom_at_pixel(&mut self, factor: f64, anchor_x: f64) -> ZoomState {
        let anchor_age = x_to_age(anchor_x, self.zoom, self.config.coordinates);
        self.zoom_at(factor, anchor_age)
    }

    /// Moves the visible window by `delta_years`, clamped to the supported range.
    pub fn pan_by_years(&mut self, delta_years: f64) -> ZoomState {
        let next = self.zoom.pan_by(delta_years);
        self.apply_zoom(next, "pan by years")
    }

    /// Replaces the zoom state, clamping it into the supported range.
    pub fn set_zoom_state(&mut self, state: ZoomState) -> ZoomState {
        self.apply_zoom(state.normalized(), "set zoom state")
    }

    /// Restores the configured initial window.
    pub fn reset_zoom(&mut self) -> ZoomState {
        self.apply_zoom(self.config.initial_zoom, "reset zoom")
    }

    fn apply_zoom(&mut self, next: ZoomState, reason: &'static str) -> ZoomState {
        if next == self.zoom {
            trace!(reason, "zoom state unchanged");
            return next;
        }

        debug!(
            reason,
            old_level = self.zoom.zoom_level(),
            new_level = next.zoom_level(),
            old_start = self.zoom.window_start(),
            old_end = self.zoom.window_end(),
            new_start = next.window_start(),
            new_end = next.window_end(),
            "zoom state changed"
        );
        self.zoom = next;
        next
    }
}
