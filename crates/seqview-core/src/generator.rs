//! Sequence generation dispatch and error type.

use num_bigint::BigUint;
use tracing::debug;

use crate::fibonacci;
use crate::kind::SequenceKind;

/// Error type for sequence generation.
#[derive(Debug, thiserror::Error)]
pub enum SeqError {
    /// The selected kind has no backing computation.
    #[error("{0} is not implemented")]
    Unsupported(SequenceKind),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Generate `n_terms` elements of the given sequence kind.
///
/// Fibonacci is the only kind with a backing computation; the placeholder
/// kinds return [`SeqError::Unsupported`] so callers can surface an
/// explicit "not implemented" rather than an empty result.
pub fn generate_sequence(kind: SequenceKind, n_terms: i64) -> Result<Vec<BigUint>, SeqError> {
    debug!(kind = %kind, terms = n_terms, "generating sequence");
    match kind {
        SequenceKind::Fibonacci => Ok(fibonacci::generate(n_terms)),
        other => Err(SeqError::Unsupported(other)),
    }
}
