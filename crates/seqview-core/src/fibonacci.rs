//! Iterative Fibonacci sequence generator.

use num_bigint::BigUint;

/// Generate the first `n_terms` Fibonacci numbers.
///
/// Total over all integers: non-positive counts produce the empty
/// sequence, a count of one produces `[0]`, and larger counts extend
/// `[0, 1]` with pairwise sums until the requested length is reached.
/// Values are arbitrary precision, so large term counts never overflow.
///
/// # Example
/// ```
/// let seq = seqview_core::fibonacci::generate(10);
/// assert_eq!(seq.len(), 10);
/// assert_eq!(seq[9].to_string(), "34");
/// ```
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn generate(n_terms: i64) -> Vec<BigUint> {
    if n_terms <= 0 {
        return Vec::new();
    }

    let n = n_terms as usize;
    let mut sequence = Vec::with_capacity(n);
    sequence.push(BigUint::from(0u32));
    if n == 1 {
        return sequence;
    }
    sequence.push(BigUint::from(1u32));

    while sequence.len() < n {
        let next = &sequence[sequence.len() - 1] + &sequence[sequence.len() - 2];
        sequence.push(next);
    }

    sequence
}
