//! Error types for compatibility analysis.

use ank_core::NumerologyError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MatchError {
    /// A person's numbers could not be computed.
    #[error(transparent)]
    Numerology(#[from] NumerologyError),
    /// Group operation called with too few people.
    #[error("need at least {required} people, got {given}")]
    NotEnoughPeople { required: usize, given: usize },
}

pub type Result<T> = std::result::Result<T, MatchError>;
