//! Error types for date-range searches.

use ank_core::NumerologyError;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SearchError {
    #[error(transparent)]
    Numerology(#[from] NumerologyError),
    /// Range end precedes its start.
    #[error("search range is empty: {start} is after {end}")]
    EmptyRange { start: NaiveDate, end: NaiveDate },
    /// A date in the scan would fall outside the calendar.
    #[error("date arithmetic overflowed past {0}")]
    DateOverflow(NaiveDate),
}

pub type Result<T> = std::result::Result<T, SearchError>;
