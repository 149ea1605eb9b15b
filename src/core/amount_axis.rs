use serde::{Deserialize, Serialize};

use crate::core::types::Occurrence;

/// Smallest maximum the amount axis may collapse to.
pub const AMOUNT_AXIS_FLOOR: f64 = 100_000.0;
/// Number of equal bands between the axis labels.
pub const AMOUNT_AXIS_BANDS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmountLabel {
    pub amount: f64,
    /// Vertical position from the top of the axis, `0` is the top edge.
    pub position_percent: f64,
}

/// Vertical amount scale derived from the occurrence list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmountAxis {
    pub max: f64,
    pub labels: Vec<AmountLabel>,
}

impl AmountAxis {
    /// Builds the axis for an explicit set of amounts.
    ///
    /// Non-finite amounts are ignored. The maximum never drops below
    /// [`AMOUNT_AXIS_FLOOR`].
    #[must_use]
    pub fn from_amounts<I>(amounts: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let max = amounts
            .into_iter()
            .filter(|amount| amount.is_finite())
            .fold(AMOUNT_AXIS_FLOOR, f64::max);

        let bands = f64::from(AMOUNT_AXIS_BANDS);
        let labels = (0..=AMOUNT_AXIS_BANDS)
            .map(|i| {
                let i = f64::from(i);
                AmountLabel {
                    amount: i * max / bands,
                    position_percent: 100.0 - (100.0 / bands) * i,
                }
            })
            .collect();

        Self { max, labels }
    }
}

impl Default for AmountAxis {
    fn default() -> Self {
        Self::from_amounts(std::iter::empty())
    }
}

#[must_use]
pub fn compute_amount_axis(occurrences: &[Occurrence]) -> AmountAxis {
    AmountAxis::from_amounts(occurrences.iter().map(|occurrence| occurrence.amount))
}
