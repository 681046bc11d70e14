//! Pinnacles and challenges: the four life periods and their obstacles.
//!
//! Both use the digit roots of the birth day, month and year digit sum.
//! The first pinnacle ends at age 36 minus the Life Path root; the second
//! and third last nine years each; the fourth runs to the end of life.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::date::{age_on, ensure_supported};
use crate::error::Result;
use crate::reduce::{ReducedNumber, digit_root, digit_sum, reduce_sum};

/// Upper age bound of the fourth pinnacle.
pub const LAST_PINNACLE_END_AGE: u32 = 99;

/// One of the four pinnacle periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pinnacle {
    pub number: ReducedNumber,
    /// 1..=4.
    pub period: u8,
    pub start_age: u32,
    /// Inclusive.
    pub end_age: u32,
}

impl Pinnacle {
    pub fn contains_age(&self, age: u32) -> bool {
        (self.start_age..=self.end_age).contains(&age)
    }
}

/// One of the four challenge numbers, 0..=8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Challenge {
    pub number: u8,
    /// 1..=4.
    pub period: u8,
}

struct Roots {
    day: u8,
    month: u8,
    year: u8,
}

fn roots(birth_date: NaiveDate) -> Result<Roots> {
    ensure_supported(birth_date)?;
    Ok(Roots {
        day: digit_root(u64::from(birth_date.day())),
        month: digit_root(u64::from(birth_date.month())),
        year: digit_root(digit_sum(u64::from(birth_date.year().unsigned_abs()))),
    })
}

/// The four pinnacles in period order.
pub fn pinnacles(birth_date: NaiveDate) -> Result<[Pinnacle; 4]> {
    let r = roots(birth_date)?;
    let life_path_root = u32::from(digit_root(u64::from(r.day + r.month + r.year)));
    let first_end = 36 - life_path_root;

    let p1 = reduce_sum(u32::from(r.month + r.day))?;
    let p2 = reduce_sum(u32::from(r.day + r.year))?;
    let p3 = reduce_sum(u32::from(p1) + u32::from(p2))?;
    let p4 = reduce_sum(u32::from(r.month + r.year))?;

    Ok([
        Pinnacle {
            number: p1,
            period: 1,
            start_age: 0,
            end_age: first_end,
        },
        Pinnacle {
            number: p2,
            period: 2,
            start_age: first_end + 1,
            end_age: first_end + 9,
        },
        Pinnacle {
            number: p3,
            period: 3,
            start_age: first_end + 10,
            end_age: first_end + 18,
        },
        Pinnacle {
            number: p4,
            period: 4,
            start_age: first_end + 19,
            end_age: LAST_PINNACLE_END_AGE,
        },
    ])
}

/// The four challenges in period order.
pub fn challenges(birth_date: NaiveDate) -> Result<[Challenge; 4]> {
    let r = roots(birth_date)?;
    let c1 = r.month.abs_diff(r.day);
    let c2 = r.day.abs_diff(r.year);
    let c3 = c1.abs_diff(c2);
    let c4 = r.month.abs_diff(r.year);
    Ok([
        Challenge { number: c1, period: 1 },
        Challenge { number: c2, period: 2 },
        Challenge { number: c3, period: 3 },
        Challenge { number: c4, period: 4 },
    ])
}

/// Index of the period covering the age on `on`; past 99 stays in the fourth.
fn period_index(pinnacles: &[Pinnacle; 4], age: u32) -> usize {
    pinnacles
        .iter()
        .position(|p| p.contains_age(age))
        .unwrap_or(3)
}

/// Pinnacle active on a reference date.
pub fn current_pinnacle(birth_date: NaiveDate, on: NaiveDate) -> Result<Pinnacle> {
    let all = pinnacles(birth_date)?;
    let age = age_on(birth_date, on)?;
    Ok(all[period_index(&all, age)])
}

/// Challenge active on a reference date (same periods as the pinnacles).
pub fn current_challenge(birth_date: NaiveDate, on: NaiveDate) -> Result<Challenge> {
    let all = pinnacles(birth_date)?;
    let age = age_on(birth_date, on)?;
    Ok(challenges(birth_date)?[period_index(&all, age)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn year_zero_has_no_pinnacles() {
        assert!(pinnacles(d(0, 5, 15)).is_err());
        assert!(challenges(d(0, 5, 15)).is_err());
    }

    #[test]
    fn pinnacles_1990_05_15() {
        // day 6, month 5, year 1; life path 12 -> 3; first ends at 33
        let p = pinnacles(d(1990, 5, 15)).unwrap();
        assert_eq!(p[0].number.value(), 11); // 5 + 6
        assert_eq!(p[1].number.value(), 7); // 6 + 1
        assert_eq!(p[2].number.value(), 9); // 11 + 7 = 18 -> 9
        assert_eq!(p[3].number.value(), 6); // 5 + 1
        assert_eq!((p[0].start_age, p[0].end_age), (0, 33));
        assert_eq!((p[1].start_age, p[1].end_age), (34, 42));
        assert_eq!((p[2].start_age, p[2].end_age), (43, 51));
        assert_eq!((p[3].start_age, p[3].end_age), (52, 99));
    }

    #[test]
    fn challenges_1990_05_15() {
        let c = challenges(d(1990, 5, 15)).unwrap();
        let numbers: Vec<u8> = c.iter().map(|c| c.number).collect();
        // |5-6|=1, |6-1|=5, |1-5|=4, |5-1|=4
        assert_eq!(numbers, vec![1, 5, 4, 4]);
    }

    #[test]
    fn periods_are_contiguous() {
        let p = pinnacles(d(1977, 12, 31)).unwrap();
        for w in p.windows(2) {
            assert_eq!(w[0].end_age + 1, w[1].start_age);
        }
    }

    #[test]
    fn current_by_age() {
        let birth = d(1990, 5, 15);
        assert_eq!(current_pinnacle(birth, d(2000, 1, 1)).unwrap().period, 1);
        assert_eq!(current_pinnacle(birth, d(2024, 5, 15)).unwrap().period, 2);
        assert_eq!(current_challenge(birth, d(2045, 1, 1)).unwrap().period, 4);
        // Beyond 99 the last period still applies.
        assert_eq!(current_pinnacle(birth, d(2100, 1, 1)).unwrap().period, 4);
    }
}
