//! Padded y-axis bounds for the chart.

use num_bigint::BigUint;

use crate::points::plot_value;

/// Fraction of the value range added as headroom on each side.
pub const PAD_FRACTION: f64 = 0.1;

/// Y-axis bounds derived from a sequence: min and max padded by 10% of
/// the range. An empty sequence defaults to exactly (0.0, 1.0) so the
/// chart always has a usable axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotBounds {
    pub lower: f64,
    pub upper: f64,
}

impl PlotBounds {
    /// Compute bounds for a sequence.
    #[must_use]
    pub fn from_values(values: &[BigUint]) -> Self {
        if values.is_empty() {
            return Self {
                lower: 0.0,
                upper: 1.0,
            };
        }

        let mut min_val = f64::INFINITY;
        let mut max_val = f64::NEG_INFINITY;
        for value in values {
            let v = plot_value(value);
            min_val = min_val.min(v);
            max_val = max_val.max(v);
        }

        let pad = (max_val - min_val) * PAD_FRACTION;
        Self {
            lower: min_val - pad,
            upper: max_val + pad,
        }
    }

    /// The padded range height.
    #[must_use]
    pub fn span(self) -> f64 {
        self.upper - self.lower
    }
}
