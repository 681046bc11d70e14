//! Personal and universal cycle numbers.
//!
//! Personal numbers combine the birth day and month with a reference date.
//! Universal numbers depend on the calendar alone.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::date::{ensure_supported, flat_digit_sum};
use crate::error::{NumerologyError, Result};
use crate::reduce::{ReducedNumber, digit_sum, reduce, reduce_sum};

fn ensure_year(year: i32) -> Result<()> {
    if year < 1 {
        return Err(NumerologyError::InvalidInput("year must be positive"));
    }
    Ok(())
}

fn ensure_month(month: u32) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(NumerologyError::InvalidInput("month must be 1-12"));
    }
    Ok(())
}

/// Personal Year: reduce(reduced birth day + reduced birth month + digit sum of target year).
pub fn personal_year_number(birth_date: NaiveDate, target_year: i32) -> Result<ReducedNumber> {
    ensure_supported(birth_date)?;
    ensure_year(target_year)?;
    let day = reduce(i64::from(birth_date.day()))?;
    let month = reduce(i64::from(birth_date.month()))?;
    let year_digits = digit_sum(u64::from(target_year.unsigned_abs())) as u32;
    let n = reduce_sum(u32::from(day) + u32::from(month) + year_digits)?;
    debug!(%birth_date, target_year, personal_year = n.value(), "personal year");
    Ok(n)
}

/// Personal Month: reduce(personal year + reduced target month).
pub fn personal_month_number(
    birth_date: NaiveDate,
    target_year: i32,
    target_month: u32,
) -> Result<ReducedNumber> {
    ensure_month(target_month)?;
    let year = personal_year_number(birth_date, target_year)?;
    let month = reduce(i64::from(target_month))?;
    reduce_sum(u32::from(year) + u32::from(month))
}

/// Personal Day: reduce(personal month + reduced target day).
pub fn personal_day_number(birth_date: NaiveDate, target: NaiveDate) -> Result<ReducedNumber> {
    let month = personal_month_number(birth_date, target.year(), target.month())?;
    personal_day_from_month(month, target)
}

/// Personal Day when the personal year is already known.
///
/// Used by scorers that receive the personal year rather than the birth date.
pub fn personal_day_from_year(
    personal_year: ReducedNumber,
    target: NaiveDate,
) -> Result<ReducedNumber> {
    let month = reduce(i64::from(target.month()))?;
    let personal_month = reduce_sum(u32::from(personal_year) + u32::from(month))?;
    personal_day_from_month(personal_month, target)
}

fn personal_day_from_month(
    personal_month: ReducedNumber,
    target: NaiveDate,
) -> Result<ReducedNumber> {
    let day = reduce(i64::from(target.day()))?;
    reduce_sum(u32::from(personal_month) + u32::from(day))
}

/// Universal Year: the year's digit sum reduced.
pub fn universal_year_number(year: i32) -> Result<ReducedNumber> {
    ensure_year(year)?;
    reduce(digit_sum(u64::from(year.unsigned_abs())) as i64)
}

/// Universal Month: reduce(universal year + month).
pub fn universal_month_number(year: i32, month: u32) -> Result<ReducedNumber> {
    ensure_month(month)?;
    let uy = universal_year_number(year)?;
    reduce_sum(u32::from(uy) + month)
}

/// Universal Day: every digit of the date summed flat, then reduced.
///
/// Unlike Life Path there is no component-wise master preservation.
pub fn universal_day_number(date: NaiveDate) -> Result<ReducedNumber> {
    let n = reduce_sum(flat_digit_sum(date)?)?;
    debug!(%date, universal_day = n.value(), "universal day");
    Ok(n)
}
