//! Text rendering of a sequence.

use num_bigint::BigUint;

/// Render a sequence as a bracketed, comma-separated list of exact
/// decimal values, e.g. `[0, 1, 1, 2, 3, 5, 8, 13, 21, 34]`.
#[must_use]
pub fn sequence_text(values: &[BigUint]) -> String {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(values: &[u64]) -> Vec<BigUint> {
        values.iter().map(|&v| BigUint::from(v)).collect()
    }

    #[test]
    fn empty_sequence() {
        assert_eq!(sequence_text(&[]), "[]");
    }

    #[test]
    fn single_element() {
        assert_eq!(sequence_text(&seq(&[0])), "[0]");
    }

    #[test]
    fn ten_terms() {
        let values = seq(&[0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
        assert_eq!(sequence_text(&values), "[0, 1, 1, 2, 3, 5, 8, 13, 21, 34]");
    }

    #[test]
    fn values_beyond_u64_stay_exact() {
        let big: BigUint = "218922995834555169026".parse().unwrap();
        let text = sequence_text(&[big]);
        assert_eq!(text, "[218922995834555169026]");
    }
}
