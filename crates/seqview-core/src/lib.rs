//! # seqview-core
//!
//! Core library for the seqview sequence explorer: the sequence-kind
//! selector domain, the term-count slider value, and the big-integer
//! Fibonacci generator.

pub mod constants;
pub mod fibonacci;
pub mod generator;
pub mod kind;
pub mod terms;

// Re-exports
pub use constants::{exit_codes, DEFAULT_TERMS, MAX_TERMS, MIN_TERMS};
pub use generator::{generate_sequence, SeqError};
pub use kind::SequenceKind;
pub use terms::TermCount;
