//! Sequence kinds offered by the selector.

use std::fmt;
use std::str::FromStr;

use crate::generator::SeqError;

/// The sequence types the selector offers.
///
/// Only [`SequenceKind::Fibonacci`] has a backing computation; the other
/// variants exist so that selecting them fails with an explicit
/// [`SeqError::Unsupported`] instead of silently doing nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SequenceKind {
    #[default]
    Fibonacci,
    Arithmetic,
    Geometric,
    WordBased,
}

impl SequenceKind {
    /// All kinds, in selector order.
    pub const ALL: [SequenceKind; 4] = [
        SequenceKind::Fibonacci,
        SequenceKind::Arithmetic,
        SequenceKind::Geometric,
        SequenceKind::WordBased,
    ];

    /// Human-readable label shown in the selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SequenceKind::Fibonacci => "Fibonacci",
            SequenceKind::Arithmetic => "Arithmetic Progression",
            SequenceKind::Geometric => "Geometric Progression",
            SequenceKind::WordBased => "Word-Based Sequence",
        }
    }

    /// Whether this kind has a backing computation.
    #[must_use]
    pub fn is_implemented(self) -> bool {
        matches!(self, SequenceKind::Fibonacci)
    }

    /// Chart and panel title for a generated sequence of this kind.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            SequenceKind::Fibonacci => "Fibonacci Sequence",
            SequenceKind::Arithmetic => "Arithmetic Progression",
            SequenceKind::Geometric => "Geometric Progression",
            SequenceKind::WordBased => "Word-Based Sequence",
        }
    }

    /// The kind after this one, wrapping at the end of the selector.
    #[must_use]
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&k| k == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// The kind before this one, wrapping at the top of the selector.
    #[must_use]
    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|&k| k == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SequenceKind {
    type Err = SeqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(' ', "-").as_str() {
            "fibonacci" | "fib" => Ok(SequenceKind::Fibonacci),
            "arithmetic" | "arithmetic-progression" => Ok(SequenceKind::Arithmetic),
            "geometric" | "geometric-progression" => Ok(SequenceKind::Geometric),
            "word" | "word-based" | "word-based-sequence" => Ok(SequenceKind::WordBased),
            other => Err(SeqError::Config(format!("unknown sequence kind: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_selector() {
        assert_eq!(SequenceKind::Fibonacci.label(), "Fibonacci");
        assert_eq!(SequenceKind::Arithmetic.label(), "Arithmetic Progression");
        assert_eq!(SequenceKind::Geometric.label(), "Geometric Progression");
        assert_eq!(SequenceKind::WordBased.label(), "Word-Based Sequence");
    }

    #[test]
    fn only_fibonacci_is_implemented() {
        for kind in SequenceKind::ALL {
            assert_eq!(kind.is_implemented(), kind == SequenceKind::Fibonacci);
        }
    }

    #[test]
    fn titles_name_the_sequence() {
        assert_eq!(SequenceKind::Fibonacci.title(), "Fibonacci Sequence");
        assert_eq!(SequenceKind::Arithmetic.title(), "Arithmetic Progression");
    }

    #[test]
    fn next_cycles_through_all_kinds() {
        let mut kind = SequenceKind::Fibonacci;
        for expected in SequenceKind::ALL {
            assert_eq!(kind, expected);
            kind = kind.next();
        }
        assert_eq!(kind, SequenceKind::Fibonacci);
    }

    #[test]
    fn prev_is_inverse_of_next() {
        for kind in SequenceKind::ALL {
            assert_eq!(kind.next().prev(), kind);
            assert_eq!(kind.prev().next(), kind);
        }
    }

    #[test]
    fn default_is_fibonacci() {
        assert_eq!(SequenceKind::default(), SequenceKind::Fibonacci);
    }

    #[test]
    fn parse_known_kinds() {
        assert_eq!(
            "fibonacci".parse::<SequenceKind>().unwrap(),
            SequenceKind::Fibonacci
        );
        assert_eq!(
            "Fib".parse::<SequenceKind>().unwrap(),
            SequenceKind::Fibonacci
        );
        assert_eq!(
            "arithmetic".parse::<SequenceKind>().unwrap(),
            SequenceKind::Arithmetic
        );
        assert_eq!(
            "geometric-progression".parse::<SequenceKind>().unwrap(),
            SequenceKind::Geometric
        );
        assert_eq!(
            "word-based".parse::<SequenceKind>().unwrap(),
            SequenceKind::WordBased
        );
    }

    #[test]
    fn parse_unknown_kind_errors() {
        let err = "triangular".parse::<SequenceKind>();
        assert!(matches!(err, Err(SeqError::Config(_))));
    }

    #[test]
    fn labels_parse_back_to_their_kind() {
        for kind in SequenceKind::ALL {
            assert_eq!(kind.label().parse::<SequenceKind>().unwrap(), kind);
        }
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(
            SequenceKind::WordBased.to_string(),
            "Word-Based Sequence"
        );
    }
}
