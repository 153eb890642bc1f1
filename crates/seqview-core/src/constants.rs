//! Constants for the term-count slider and process exit codes.

/// Smallest term count the slider offers. Two terms (0, 1) is the shortest
/// prefix that shows the recurrence; the generator itself accepts less.
pub const MIN_TERMS: i64 = 2;

/// Largest term count the slider offers.
pub const MAX_TERMS: i64 = 100;

/// Term count the slider starts at.
pub const DEFAULT_TERMS: i64 = 10;

/// Slider movement per arrow-key press.
pub const TERMS_STEP: i64 = 1;

/// Slider movement per PageUp/PageDown press.
pub const TERMS_PAGE: i64 = 10;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Requested sequence kind has no backing computation.
    pub const ERROR_UNSUPPORTED: i32 = 2;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
