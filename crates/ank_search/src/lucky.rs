//! Lucky-date scoring and range search.
//!
//! A date scores points for each condition it meets against a person's
//! life path, destiny and personal year. The date number is the flat
//! universal day; the personal day comes from the personal year.

use ank_core::{
    NameConfig, ProfileInput, ReducedNumber, destiny_number_with, life_path_number,
    personal_day_from_year, personal_year_number, universal_day_number,
};
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{Result, SearchError};

/// Minimum score for [`next_lucky_date`].
pub const NEXT_LUCKY_MIN_SCORE: u32 = 40;

/// A condition that earned points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LuckyReason {
    LifePathMatch,
    LifePathCompatible,
    DestinyMatch,
    DestinyCompatible,
    PersonalYearMatch,
    DayMatch,
    MasterNumber,
    MirrorDate,
    RepeatingDigits,
}

impl LuckyReason {
    pub const fn points(self) -> u32 {
        match self {
            Self::LifePathMatch => 30,
            Self::LifePathCompatible => 20,
            Self::DestinyMatch => 25,
            Self::DestinyCompatible => 15,
            Self::PersonalYearMatch => 20,
            Self::DayMatch => 15,
            Self::MasterNumber => 25,
            Self::MirrorDate => 10,
            Self::RepeatingDigits => 10,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::LifePathMatch => "lifePathMatch",
            Self::LifePathCompatible => "lifePathCompatible",
            Self::DestinyMatch => "destinyMatch",
            Self::DestinyCompatible => "destinyCompatible",
            Self::PersonalYearMatch => "personalYearMatch",
            Self::DayMatch => "dayMatch",
            Self::MasterNumber => "masterNumber",
            Self::MirrorDate => "mirrorDate",
            Self::RepeatingDigits => "repeatingDigits",
        }
    }
}

/// Date numbers that harmonise with a personal number.
pub const fn compatible_numbers(n: ReducedNumber) -> &'static [u8] {
    match n.value() {
        1 => &[1, 2, 3, 5, 9],
        2 => &[1, 2, 6, 8, 9],
        3 | 5 => &[1, 3, 5, 6, 9],
        4 => &[4, 6, 7, 8],
        6 => &[2, 3, 4, 5, 6, 9],
        7 => &[4, 7],
        8 => &[2, 4, 8],
        9 => &[1, 2, 3, 5, 6, 9],
        11 => &[2, 4, 6, 8, 11, 22],
        22 => &[4, 6, 8, 11, 22, 33],
        _ => &[3, 6, 9, 22, 33],
    }
}

fn is_compatible(personal: ReducedNumber, date_number: ReducedNumber) -> bool {
    compatible_numbers(personal).contains(&date_number.value())
}

fn compact_digits(date: NaiveDate) -> String {
    format!("{:04}{:02}{:02}", date.year(), date.month(), date.day())
}

/// Day equals month, or YYYYMMDD reads the same backwards.
pub fn is_mirror_date(date: NaiveDate) -> bool {
    if date.day() == date.month() {
        return true;
    }
    let digits = compact_digits(date);
    digits.bytes().eq(digits.bytes().rev())
}

/// Three or more identical consecutive digits in YYYYMMDD.
pub fn has_repeating_digits(date: NaiveDate) -> bool {
    compact_digits(date)
        .as_bytes()
        .windows(3)
        .any(|w| w[0] == w[1] && w[1] == w[2])
}

/// Score and reasons for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckyScore {
    pub score: u32,
    pub reasons: Vec<LuckyReason>,
    pub personal_day: ReducedNumber,
    pub universal_day: ReducedNumber,
}

/// Score a date against a person's numbers.
pub fn calculate_lucky_score(
    date: NaiveDate,
    life_path: ReducedNumber,
    destiny: ReducedNumber,
    personal_year: ReducedNumber,
) -> Result<LuckyScore> {
    let universal_day = universal_day_number(date)?;
    let personal_day = personal_day_from_year(personal_year, date)?;
    let mut reasons = Vec::new();

    if universal_day == life_path {
        reasons.push(LuckyReason::LifePathMatch);
    } else if is_compatible(life_path, universal_day) {
        reasons.push(LuckyReason::LifePathCompatible);
    }
    if universal_day == destiny {
        reasons.push(LuckyReason::DestinyMatch);
    } else if is_compatible(destiny, universal_day) {
        reasons.push(LuckyReason::DestinyCompatible);
    }
    if universal_day == personal_year {
        reasons.push(LuckyReason::PersonalYearMatch);
    }
    if personal_day == life_path || personal_day == destiny {
        reasons.push(LuckyReason::DayMatch);
    }
    if universal_day.is_master() || matches!(date.day(), 11 | 22) {
        reasons.push(LuckyReason::MasterNumber);
    }
    if is_mirror_date(date) {
        reasons.push(LuckyReason::MirrorDate);
    }
    if has_repeating_digits(date) {
        reasons.push(LuckyReason::RepeatingDigits);
    }

    let score = reasons.iter().map(|r| r.points()).sum();
    trace!(%date, score, "lucky score");
    Ok(LuckyScore {
        score,
        reasons,
        personal_day,
        universal_day,
    })
}

/// Search thresholds and result sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckyConfig {
    /// Dates scoring below this are dropped.
    pub min_score: u32,
    /// Length of the `best` list.
    pub best_count: usize,
    /// Default look-ahead in days.
    pub search_days: u32,
    /// Letter system used for the destiny number.
    pub name: NameConfig,
}

impl Default for LuckyConfig {
    fn default() -> Self {
        Self {
            min_score: 30,
            best_count: 5,
            search_days: 30,
            name: NameConfig::default(),
        }
    }
}

impl LuckyConfig {
    pub fn with_min_score(self, min_score: u32) -> Self {
        Self { min_score, ..self }
    }
}

/// A date that passed the threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckyDate {
    pub date: NaiveDate,
    pub personal_year: ReducedNumber,
    #[serde(flatten)]
    pub score: LuckyScore,
}

/// Result of a range search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckyDates {
    /// Sorted by score descending, then date ascending.
    pub dates: Vec<LuckyDate>,
    /// First `best_count` entries of `dates`.
    pub best: Vec<LuckyDate>,
    pub life_path: ReducedNumber,
    pub destiny: ReducedNumber,
}

fn scan(
    profile: &ProfileInput,
    start: NaiveDate,
    end: NaiveDate,
    config: &LuckyConfig,
) -> Result<(ReducedNumber, ReducedNumber, Vec<LuckyDate>)> {
    if start > end {
        return Err(SearchError::EmptyRange { start, end });
    }
    let birth = profile.birth_date();
    let life_path = life_path_number(birth)?;
    let destiny = destiny_number_with(profile.full_name(), &config.name)?;

    let mut dates = Vec::new();
    let mut year = None;
    for date in start.iter_days().take_while(|d| *d <= end) {
        let personal_year = match year {
            Some((y, py)) if y == date.year() => py,
            _ => {
                let py = personal_year_number(birth, date.year())?;
                year = Some((date.year(), py));
                py
            }
        };
        let score = calculate_lucky_score(date, life_path, destiny, personal_year)?;
        if score.score >= config.min_score {
            dates.push(LuckyDate {
                date,
                personal_year,
                score,
            });
        }
    }
    Ok((life_path, destiny, dates))
}

/// Dates in `start..=end` scoring at least `config.min_score`.
pub fn find_lucky_dates(
    profile: &ProfileInput,
    start: NaiveDate,
    end: NaiveDate,
    config: &LuckyConfig,
) -> Result<LuckyDates> {
    let (life_path, destiny, mut dates) = scan(profile, start, end, config)?;
    dates.sort_by(|a, b| b.score.score.cmp(&a.score.score).then(a.date.cmp(&b.date)));
    let best = dates.iter().take(config.best_count).cloned().collect();
    debug!(%start, %end, found = dates.len(), "lucky dates");
    Ok(LuckyDates {
        dates,
        best,
        life_path,
        destiny,
    })
}

/// What a lucky date is wanted for; each purpose has its own threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Purpose {
    Business,
    Romance,
    Travel,
    Health,
    General,
}

impl Purpose {
    pub const fn min_score(self) -> u32 {
        match self {
            Self::Business => 40,
            Self::Romance => 35,
            Self::Travel => 30,
            Self::Health => 35,
            Self::General => 25,
        }
    }
}

/// Lucky dates within one calendar month for a purpose.
pub fn lucky_dates_for_purpose(
    profile: &ProfileInput,
    purpose: Purpose,
    year: i32,
    month: u32,
    config: &LuckyConfig,
) -> Result<LuckyDates> {
    let start = ank_core::calendar_date(year, month, 1)?;
    let end = last_day_of_month(start)?;
    find_lucky_dates(
        profile,
        start,
        end,
        &config.with_min_score(purpose.min_score()),
    )
}

pub(crate) fn last_day_of_month(first: NaiveDate) -> Result<NaiveDate> {
    let next = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    next.and_then(|d| d.pred_opt())
        .ok_or(SearchError::DateOverflow(first))
}

/// Earliest date in `from..=from + days` scoring at least 40.
pub fn next_lucky_date(
    profile: &ProfileInput,
    from: NaiveDate,
    days: u32,
    config: &LuckyConfig,
) -> Result<Option<LuckyDate>> {
    let end = from
        .checked_add_days(Days::new(u64::from(days)))
        .ok_or(SearchError::DateOverflow(from))?;
    let strict = config.with_min_score(NEXT_LUCKY_MIN_SCORE);
    let (_, _, dates) = scan(profile, from, end, &strict)?;
    // Scan order is chronological.
    Ok(dates.into_iter().next())
}
