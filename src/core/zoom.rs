use serde::{Deserialize, Serialize};

use crate::core::primitives::clamp_finite;

pub const MIN_ZOOM_LEVEL: f64 = 1.0;
pub const MAX_ZOOM_LEVEL: f64 = 12.0;
/// First age of the supported life-stage range.
pub const MIN_WINDOW_AGE: f64 = 15.0;
/// Last age of the supported life-stage range.
pub const MAX_WINDOW_AGE: f64 = 70.0;
/// Narrowest visible span, in years.
pub const MIN_WINDOW_SPAN: f64 = 0.25;

/// Zoom level plus the visible age window.
///
/// Invariants: `1 <= zoom_level <= 12` and
/// `15 <= window_start < window_end <= 70`. Every constructor and transition
/// clamps instead of failing, since the inputs come from continuous gestures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "ZoomStateFields")]
pub struct ZoomState {
    zoom_level: f64,
    window_start: f64,
    window_end: f64,
}

/// Wire shape of [`ZoomState`]; decoded values pass through [`ZoomState::new`].
#[derive(Deserialize)]
struct ZoomStateFields {
    zoom_level: f64,
    window_start: f64,
    window_end: f64,
}

impl From<ZoomStateFields> for ZoomState {
    fn from(fields: ZoomStateFields) -> Self {
        Self::new(fields.zoom_level, fields.window_start, fields.window_end)
    }
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            zoom_level: MIN_ZOOM_LEVEL,
            window_start: MIN_WINDOW_AGE,
            window_end: MAX_WINDOW_AGE,
        }
    }
}

impl ZoomState {
    /// Builds a state, clamping every component into its supported range.
    ///
    /// Inverted windows are swapped and windows narrower than
    /// [`MIN_WINDOW_SPAN`] are widened around their center.
    #[must_use]
    pub fn new(zoom_level: f64, window_start: f64, window_end: f64) -> Self {
        let zoom_level = clamp_finite(zoom_level, MIN_ZOOM_LEVEL, MAX_ZOOM_LEVEL, MIN_ZOOM_LEVEL);
        let start = clamp_finite(window_start, MIN_WINDOW_AGE, MAX_WINDOW_AGE, MIN_WINDOW_AGE);
        let end = clamp_finite(window_end, MIN_WINDOW_AGE, MAX_WINDOW_AGE, MAX_WINDOW_AGE);
        let (start, end) = (start.min(end), start.max(end));

        let (window_start, window_end) = if end - start < MIN_WINDOW_SPAN {
            shift_into_range(0.5 * (start + end) - 0.5 * MIN_WINDOW_SPAN, MIN_WINDOW_SPAN)
        } else {
            (start, end)
        };

        Self {
            zoom_level,
            window_start,
            window_end,
        }
    }

    /// Re-applies the invariants, e.g. after deserializing untrusted input.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self::new(self.zoom_level, self.window_start, self.window_end)
    }

    #[must_use]
    pub fn zoom_level(self) -> f64 {
        self.zoom_level
    }

    #[must_use]
    pub fn window_start(self) -> f64 {
        self.window_start
    }

    #[must_use]
    pub fn window_end(self) -> f64 {
        self.window_end
    }

    #[must_use]
    pub fn window(self) -> (f64, f64) {
        (self.window_start, self.window_end)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.window_end - self.window_start
    }

    #[must_use]
    pub fn center(self) -> f64 {
        0.5 * (self.window_start + self.window_end)
    }

    #[must_use]
    pub fn contains(self, age: f64) -> bool {
        (self.window_start..=self.window_end).contains(&age)
    }

    /// Zooms around the window center.
    ///
    /// `factor > 1.0` zooms in, `0.0 < factor < 1.0` zooms out. The zoom level
    /// is clamped to `[1, 12]`, the new span is `span / factor` (at least
    /// [`MIN_WINDOW_SPAN`]), and each window edge is then clamped to the
    /// supported age range on its own. Invalid factors leave the
    /// state untouched.
    #[must_use]
    pub fn zoom(self, factor: f64) -> Self {
        if !factor.is_finite() || factor <= 0.0 {
            return self;
        }

        let zoom_level = (self.zoom_level * factor).clamp(MIN_ZOOM_LEVEL, MAX_ZOOM_LEVEL);
        let span = (self.span() / factor).max(MIN_WINDOW_SPAN);
        let center = self.center();
        let window_start = (center - 0.5 * span).clamp(MIN_WINDOW_AGE, MAX_WINDOW_AGE);
        let window_end = (center + 0.5 * span).clamp(MIN_WINDOW_AGE, MAX_WINDOW_AGE);

        Self {
            zoom_level,
            window_start,
            window_end,
        }
    }

    /// Zooms while keeping `anchor_age` at the same relative window position.
    ///
    /// The anchor is clamped into the current window. When the resulting
    /// window leaves the supported range it is shifted back, keeping its span.
    #[must_use]
    pub fn zoom_at(self, factor: f64, anchor_age: f64) -> Self {
        if !factor.is_finite() || factor <= 0.0 {
            return self;
        }

        let current_span = self.span();
        let anchor = clamp_finite(anchor_age, self.window_start, self.window_end, self.center());
        let left_ratio = (anchor - self.window_start) / current_span;
        let span = target_span(current_span, factor);
        let (window_start, window_end) = shift_into_range(anchor - left_ratio * span, span);

        Self {
            zoom_level: (self.zoom_level * factor).clamp(MIN_ZOOM_LEVEL, MAX_ZOOM_LEVEL),
            window_start,
            window_end,
        }
    }

    /// Moves the window by `delta_years`, stopping at the range edges.
    #[must_use]
    pub fn pan_by(self, delta_years: f64) -> Self {
        if !delta_years.is_finite() {
            return self;
        }

        let (window_start, window_end) =
            shift_into_range(self.window_start + delta_years, self.span());
        Self {
            window_start,
            window_end,
            ..self
        }
    }
}

/// Zooms `state` around its center. See [`ZoomState::zoom`].
#[must_use]
pub fn zoom(state: ZoomState, factor: f64) -> ZoomState {
    state.zoom(factor)
}

fn target_span(current_span: f64, factor: f64) -> f64 {
    (current_span / factor).clamp(MIN_WINDOW_SPAN, MAX_WINDOW_AGE - MIN_WINDOW_AGE)
}

fn shift_into_range(start: f64, span: f64) -> (f64, f64) {
    let start = start.clamp(MIN_WINDOW_AGE, MAX_WINDOW_AGE - span);
    (start, start + span)
}
