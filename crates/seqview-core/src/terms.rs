//! Term-count slider value.

use std::fmt;

use crate::constants::{DEFAULT_TERMS, MAX_TERMS, MIN_TERMS, TERMS_PAGE, TERMS_STEP};

/// The term count selected on the slider, clamped to `[MIN_TERMS, MAX_TERMS]`.
///
/// The bound is a UI constraint, not a domain one: the generator itself is
/// total over all `i64` inputs. Keeping the slider value as its own type
/// means every movement stays in range by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TermCount(i64);

impl TermCount {
    /// Create a term count, clamping into the slider range.
    #[must_use]
    pub fn new(terms: i64) -> Self {
        Self(terms.clamp(MIN_TERMS, MAX_TERMS))
    }

    /// The slider minimum.
    #[must_use]
    pub fn min() -> Self {
        Self(MIN_TERMS)
    }

    /// The slider maximum.
    #[must_use]
    pub fn max() -> Self {
        Self(MAX_TERMS)
    }

    /// The selected count.
    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }

    /// One step up (arrow key).
    #[must_use]
    pub fn increment(self) -> Self {
        Self::new(self.0 + TERMS_STEP)
    }

    /// One step down (arrow key).
    #[must_use]
    pub fn decrement(self) -> Self {
        Self::new(self.0 - TERMS_STEP)
    }

    /// One page up (PageUp).
    #[must_use]
    pub fn page_up(self) -> Self {
        Self::new(self.0 + TERMS_PAGE)
    }

    /// One page down (PageDown).
    #[must_use]
    pub fn page_down(self) -> Self {
        Self::new(self.0 - TERMS_PAGE)
    }

    /// Position within the slider range as a fraction in [0.0, 1.0].
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(self) -> f64 {
        (self.0 - MIN_TERMS) as f64 / (MAX_TERMS - MIN_TERMS) as f64
    }
}

impl Default for TermCount {
    fn default() -> Self {
        Self(DEFAULT_TERMS)
    }
}

impl fmt::Display for TermCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
