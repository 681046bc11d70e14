//! Daily, weekly and monthly predictions built from personal cycles.

use ank_core::{
    CycleTheme, ReducedNumber, personal_day_number, personal_month_number, universal_day_number,
};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::error::{Result, SearchError};
use crate::lucky::last_day_of_month;

/// Days covered by a weekly prediction.
pub const WEEK_LEN: usize = 7;
/// Key days kept per monthly prediction.
pub const MAX_KEY_DAYS: usize = 5;

/// Hex colour for each root 1..=9.
const DAY_COLORS: [&str; 9] = [
    "#EF4444", "#F97316", "#EAB308", "#22C55E", "#3B82F6", "#6366F1", "#8B5CF6", "#F59E0B",
    "#A855F7",
];

/// Three favourable hours of the day for each root 1..=9.
const LUCKY_HOURS: [[u8; 3]; 9] = [
    [9, 11, 19],
    [8, 14, 20],
    [10, 15, 21],
    [7, 12, 16],
    [11, 17, 22],
    [6, 13, 18],
    [5, 14, 23],
    [8, 16, 20],
    [9, 15, 21],
];

pub fn day_color(n: ReducedNumber) -> &'static str {
    DAY_COLORS[(n.root() - 1) as usize]
}

pub fn lucky_hours(n: ReducedNumber) -> [u8; 3] {
    LUCKY_HOURS[(n.root() - 1) as usize]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPrediction {
    pub date: NaiveDate,
    pub personal_day: ReducedNumber,
    pub universal_day: ReducedNumber,
    pub theme: CycleTheme,
    pub lucky_hours: [u8; 3],
    pub color: &'static str,
}

/// Prediction for one day of a person's calendar.
pub fn daily_prediction(birth: NaiveDate, date: NaiveDate) -> Result<DailyPrediction> {
    let personal_day = personal_day_number(birth, date)?;
    let universal_day = universal_day_number(date)?;
    Ok(DailyPrediction {
        date,
        personal_day,
        universal_day,
        theme: CycleTheme::for_number(personal_day),
        lucky_hours: lucky_hours(personal_day),
        color: day_color(personal_day),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPrediction {
    pub week_start: NaiveDate,
    /// 1-based week of the month `week_start` falls in.
    pub week_of_month: u32,
    pub personal_month: ReducedNumber,
    /// Theme of the rounded mean personal-day root.
    pub theme: CycleTheme,
    pub days: Vec<DailyPrediction>,
}

/// Seven daily predictions starting at `week_start`.
pub fn weekly_prediction(birth: NaiveDate, week_start: NaiveDate) -> Result<WeeklyPrediction> {
    let days = week_start
        .iter_days()
        .take(WEEK_LEN)
        .map(|date| daily_prediction(birth, date))
        .collect::<Result<Vec<_>>>()?;
    if days.len() < WEEK_LEN {
        return Err(SearchError::DateOverflow(week_start));
    }

    let total: u32 = days.iter().map(|d| u32::from(d.personal_day.root())).sum();
    let len = WEEK_LEN as u32;
    let mean = ((total + len / 2) / len) as u8;
    let theme = CycleTheme::from_digit(mean).unwrap_or(CycleTheme::Completion);

    Ok(WeeklyPrediction {
        week_start,
        week_of_month: (week_start.day() - 1) / 7 + 1,
        personal_month: personal_month_number(birth, week_start.year(), week_start.month())?,
        theme,
        days,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPrediction {
    pub year: i32,
    pub month: u32,
    pub personal_month: ReducedNumber,
    pub theme: CycleTheme,
    /// Days whose personal day echoes the month, or is a 1 or 8. At most five.
    pub key_days: Vec<DailyPrediction>,
}

fn is_key_day(personal_day: ReducedNumber, personal_month: ReducedNumber) -> bool {
    personal_day == personal_month || matches!(personal_day.value(), 1 | 8)
}

/// Personal month overview with its first key days.
pub fn monthly_prediction(birth: NaiveDate, year: i32, month: u32) -> Result<MonthlyPrediction> {
    let personal_month = personal_month_number(birth, year, month)?;
    let first = ank_core::calendar_date(year, month, 1)?;
    let last = last_day_of_month(first)?;

    let mut key_days = Vec::new();
    for date in first.iter_days().take_while(|d| *d <= last) {
        let day = daily_prediction(birth, date)?;
        if is_key_day(day.personal_day, personal_month) {
            key_days.push(day);
            if key_days.len() == MAX_KEY_DAYS {
                break;
            }
        }
    }
    debug!(year, month, key_days = key_days.len(), "monthly prediction");

    Ok(MonthlyPrediction {
        year,
        month,
        personal_month,
        theme: CycleTheme::for_number(personal_month),
        key_days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn masters_use_root_tables() {
        let eleven = ReducedNumber::new(11).unwrap();
        assert_eq!(day_color(eleven), "#F97316");
        assert_eq!(lucky_hours(eleven), [8, 14, 20]);
    }

    #[test]
    fn daily_matches_personal_day() {
        // 1990-05-15, 2024: personal year 1, May -> month 6, 10th -> 1 + 6 = 7
        let p = daily_prediction(d(1990, 5, 15), d(2024, 5, 10)).unwrap();
        assert_eq!(p.personal_day.value(), 7);
        assert_eq!(p.theme, CycleTheme::Reflection);
        assert_eq!(p.color, "#8B5CF6");
    }

    #[test]
    fn week_of_month_counts_from_one() {
        let w = weekly_prediction(d(1990, 5, 15), d(2024, 5, 15)).unwrap();
        assert_eq!(w.week_of_month, 3);
        assert_eq!(w.days.len(), WEEK_LEN);
        assert_eq!(w.days[6].date, d(2024, 5, 21));
    }

    #[test]
    fn key_days_capped() {
        let m = monthly_prediction(d(1990, 5, 15), 2024, 5).unwrap();
        assert!(m.key_days.len() <= MAX_KEY_DAYS);
        for k in &m.key_days {
            assert!(is_key_day(k.personal_day, m.personal_month));
        }
    }
}
