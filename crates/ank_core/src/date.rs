//! Date-based calculators: Life Path, Birthday, digit extraction, age.
//!
//! Life Path reduces day, month and year independently (each keeping its
//! own master number), then reduces their sum. Flattening every digit of
//! the date into a single sum is a different number and can lose masters.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::error::{NumerologyError, Result};
use crate::reduce::{ReducedNumber, digit_sum, reduce, reduce_sum};

/// Build a date from raw components, rejecting impossible ones.
pub fn calendar_date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    if year < 1 {
        return Err(NumerologyError::InvalidInput("year must be positive"));
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or(NumerologyError::InvalidDate {
        year,
        month,
        day,
    })
}

/// Digit algorithms need a positive year.
pub fn ensure_supported(date: NaiveDate) -> Result<()> {
    if date.year() < 1 {
        return Err(NumerologyError::InvalidInput("year must be positive"));
    }
    Ok(())
}

/// Day, month and year each reduced on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateComponents {
    pub day: ReducedNumber,
    pub month: ReducedNumber,
    pub year: ReducedNumber,
}

impl DateComponents {
    /// Sum of the three reduced components, before the final reduction.
    pub fn total(&self) -> u32 {
        u32::from(self.day) + u32::from(self.month) + u32::from(self.year)
    }
}

/// Reduce the three components of a date independently.
pub fn date_components(date: NaiveDate) -> Result<DateComponents> {
    ensure_supported(date)?;
    Ok(DateComponents {
        day: reduce(i64::from(date.day()))?,
        month: reduce(i64::from(date.month()))?,
        year: reduce(i64::from(date.year()))?,
    })
}

/// Life Path number.
///
/// 1990-11-15: 15 -> 6, 11 stays 11, 1990 -> 19 -> 10 -> 1; 6 + 11 + 1 = 18 -> 9.
pub fn life_path_number(birth_date: NaiveDate) -> Result<ReducedNumber> {
    let c = date_components(birth_date)?;
    let n = reduce_sum(c.total())?;
    debug!(%birth_date, life_path = n.value(), "life path number");
    Ok(n)
}

/// Birthday number: the day of month reduced.
pub fn birthday_number(birth_date: NaiveDate) -> Result<ReducedNumber> {
    ensure_supported(birth_date)?;
    reduce(i64::from(birth_date.day()))
}

/// Sum of every decimal digit of day, month and year.
pub fn flat_digit_sum(date: NaiveDate) -> Result<u32> {
    ensure_supported(date)?;
    let sum = digit_sum(u64::from(date.day()))
        + digit_sum(u64::from(date.month()))
        + digit_sum(u64::from(date.year().unsigned_abs()));
    Ok(sum as u32)
}

/// Every digit of the date written as day, month, four-digit year
/// (no zero padding on day or month). Zeros are kept.
pub fn date_digits(date: NaiveDate) -> Result<Vec<u8>> {
    ensure_supported(date)?;
    let text = format!("{}{}{}", date.day(), date.month(), date.year());
    Ok(text.bytes().map(|b| b - b'0').collect())
}

/// Completed years between `birth_date` and `on`.
pub fn age_on(birth_date: NaiveDate, on: NaiveDate) -> Result<u32> {
    if on < birth_date {
        return Err(NumerologyError::InvalidInput("reference date precedes birth date"));
    }
    let mut age = on.year() - birth_date.year();
    if (on.month(), on.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    Ok(age as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn life_path_worked_example() {
        assert_eq!(life_path_number(d(1990, 11, 15)).unwrap().value(), 9);
    }

    #[test]
    fn life_path_component_masters() {
        // 29 -> 11, 11, 2009 -> 11; 33 stays 33
        assert_eq!(life_path_number(d(2009, 11, 29)).unwrap().value(), 33);
    }

    #[test]
    fn components_keep_their_masters() {
        // 22 + 11 + (1987 -> 25 -> 7) = 40 -> 4
        let c = date_components(d(1987, 11, 22)).unwrap();
        assert_eq!(c.day.value(), 22);
        assert_eq!(c.month.value(), 11);
        assert_eq!(c.year.value(), 7);
        assert_eq!(life_path_number(d(1987, 11, 22)).unwrap().value(), 4);
    }

    #[test]
    fn other_known_life_paths() {
        // 15 -> 6, 5, 1990 -> 1; 12 -> 3
        assert_eq!(life_path_number(d(1990, 5, 15)).unwrap().value(), 3);
        // 25 -> 7, 12 -> 3, 1985 -> 23 -> 5; 15 -> 6
        assert_eq!(life_path_number(d(1985, 12, 25)).unwrap().value(), 6);
        // 1 + 1 + 2 = 4
        assert_eq!(life_path_number(d(2000, 1, 1)).unwrap().value(), 4);
    }

    #[test]
    fn birthday() {
        assert_eq!(birthday_number(d(1990, 3, 29)).unwrap().value(), 11);
        assert_eq!(birthday_number(d(1990, 3, 31)).unwrap().value(), 4);
    }

    #[test]
    fn digits_unpadded() {
        assert_eq!(date_digits(d(1990, 11, 5)).unwrap(), vec![5, 1, 1, 1, 9, 9, 0]);
    }

    #[test]
    fn invalid_components() {
        assert!(matches!(
            calendar_date(2023, 2, 30),
            Err(NumerologyError::InvalidDate { .. })
        ));
        assert!(matches!(
            calendar_date(0, 1, 1),
            Err(NumerologyError::InvalidInput(_))
        ));
        assert!(calendar_date(2024, 2, 29).is_ok());
    }

    #[test]
    fn dates_before_year_one_rejected() {
        let bce = d(-1990, 11, 15);
        assert!(matches!(flat_digit_sum(bce), Err(NumerologyError::InvalidInput(_))));
        assert!(matches!(life_path_number(bce), Err(NumerologyError::InvalidInput(_))));
        // 1+5 + 1+1 + 1+9+9+0 = 27
        assert_eq!(flat_digit_sum(d(1990, 11, 15)).unwrap(), 27);
    }

    #[test]
    fn age_counts_completed_years() {
        let birth = d(1990, 6, 15);
        assert_eq!(age_on(birth, d(2020, 6, 14)).unwrap(), 29);
        assert_eq!(age_on(birth, d(2020, 6, 15)).unwrap(), 30);
        assert!(age_on(birth, d(1980, 1, 1)).is_err());
    }
}
