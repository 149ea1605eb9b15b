use crate::error::{TimelineError, TimelineResult};

/// Linear map between a finite, non-empty domain and the unit interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> TimelineResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(TimelineError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Maps `value` to its unit position, `0` at `domain_start`.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        (value - self.domain_start) / (self.domain_end - self.domain_start)
    }

    /// Like [`Self::normalize`], clamped to `[0, 1]`. Non-finite input maps to `0`.
    #[must_use]
    pub fn normalize_clamped(self, value: f64) -> f64 {
        let normalized = self.normalize(value);
        if normalized.is_finite() {
            normalized.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn denormalize(self, unit: f64) -> f64 {
        self.domain_start + unit * (self.domain_end - self.domain_start)
    }
}
