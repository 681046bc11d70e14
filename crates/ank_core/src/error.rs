//! Error types for numerology calculations.

use thiserror::Error;

/// Errors from the core calculators.
///
/// Every calculator is a pure function, so errors are always local and
/// synchronous: either the input is out of domain, or one specific
/// sub-calculation has nothing to work with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NumerologyError {
    /// Malformed or out-of-domain input (empty name, non-positive integer, year < 1).
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// Input is well-formed but a calculator's precondition fails
    /// (e.g. no vowels for Soul Urge).
    #[error("insufficient input: {0}")]
    InsufficientInput(&'static str),
    /// Raw year/month/day components do not form a calendar date.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

/// Convenience alias used throughout the core crate.
pub type Result<T> = std::result::Result<T, NumerologyError>;
