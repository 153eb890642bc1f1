//! (index, value) pairs for plotting.

use num_bigint::BigUint;
use num_traits::ToPrimitive;

/// Convert a sequence into `(index, value)` pairs, index starting at 0,
/// in sequence order, ready for a line chart.
///
/// Values are converted to `f64` for plotting only; precision loss above
/// 2^53 is acceptable on screen while the text rendering stays exact.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn plot_points(values: &[BigUint]) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, plot_value(v)))
        .collect()
}

/// Plotting approximation of a big integer, clamped to the finite range.
pub(crate) fn plot_value(value: &BigUint) -> f64 {
    let v = value.to_f64().unwrap_or(f64::INFINITY);
    if v.is_finite() {
        v
    } else {
        f64::MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(values: &[u64]) -> Vec<BigUint> {
        values.iter().map(|&v| BigUint::from(v)).collect()
    }

    #[test]
    fn empty_sequence_has_no_points() {
        assert!(plot_points(&[]).is_empty());
    }

    #[test]
    fn indices_start_at_zero_in_order() {
        let points = plot_points(&seq(&[0, 1, 1, 2, 3]));
        assert_eq!(points.len(), 5);
        for (i, &(x, _)) in points.iter().enumerate() {
            assert!((x - i as f64).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn values_follow_the_sequence() {
        let points = plot_points(&seq(&[0, 1, 1, 2, 3, 5, 8, 13, 21, 34]));
        assert!((points[9].1 - 34.0).abs() < f64::EPSILON);
        assert!((points[0].1 - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn huge_values_stay_finite() {
        // 2^4096 overflows f64; the plot value must clamp, not panic.
        let huge = BigUint::from(1u32) << 4096u32;
        let v = plot_value(&huge);
        assert!(v.is_finite());
        assert!((v - f64::MAX).abs() < f64::EPSILON);
    }

    #[test]
    fn values_beyond_u64_approximate() {
        let big: BigUint = "218922995834555169026".parse().unwrap();
        let v = plot_value(&big);
        assert!(v > 2.1e20 && v < 2.2e20);
    }
}
