//! Karmic debt numbers and the karmic path.
//!
//! A karmic debt is flagged when an unreduced total lands on 13, 14, 16 or 19.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::date::date_components;
use crate::error::Result;
use crate::letter::NameConfig;
use crate::name::{LetterFilter, karmic_lessons, raw_letter_sum, validate_name};
use crate::reduce::digit_root;

/// The four karmic debt numbers.
pub const KARMIC_DEBT_NUMBERS: [u32; 4] = [13, 14, 16, 19];

/// Where a karmic debt was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DebtSource {
    LifePath,
    Birthday,
    Destiny,
    SoulUrge,
    Personality,
}

/// A karmic debt number and its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KarmicDebt {
    pub number: u32,
    pub source: DebtSource,
}

/// Whether an unreduced total is a karmic debt number.
pub fn is_karmic_debt(total: u32) -> bool {
    KARMIC_DEBT_NUMBERS.contains(&total)
}

/// Karmic debts in a fixed order: life path, birthday, destiny, soul urge, personality.
pub fn karmic_debts(birth_date: NaiveDate, full_name: &str) -> Result<Vec<KarmicDebt>> {
    validate_name(full_name)?;
    let config = NameConfig::default();
    let candidates = [
        (date_components(birth_date)?.total(), DebtSource::LifePath),
        (birth_date.day(), DebtSource::Birthday),
        (
            raw_letter_sum(full_name, LetterFilter::All, &config),
            DebtSource::Destiny,
        ),
        (
            raw_letter_sum(full_name, LetterFilter::Vowels, &config),
            DebtSource::SoulUrge,
        ),
        (
            raw_letter_sum(full_name, LetterFilter::Consonants, &config),
            DebtSource::Personality,
        ),
    ];
    Ok(candidates
        .into_iter()
        .filter(|&(total, _)| is_karmic_debt(total))
        .map(|(number, source)| KarmicDebt { number, source })
        .collect())
}

/// Debts, lessons and the number that ties them together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KarmicPath {
    pub debts: Vec<KarmicDebt>,
    pub lessons: Vec<u8>,
    /// First debt found.
    pub primary_debt: Option<u32>,
    /// Lowest missing value.
    pub primary_lesson: Option<u8>,
    /// Digit root of primary debt + primary lesson; 0 when there are neither.
    pub path_number: u8,
}

/// Combine debts and lessons into a karmic path.
pub fn karmic_path(birth_date: NaiveDate, full_name: &str) -> Result<KarmicPath> {
    let debts = karmic_debts(birth_date, full_name)?;
    let lessons = karmic_lessons(full_name)?;
    let primary_debt = debts.first().map(|d| d.number);
    let primary_lesson = lessons.first().copied();
    let sum = u64::from(primary_debt.unwrap_or(0)) + u64::from(primary_lesson.unwrap_or(0));
    Ok(KarmicPath {
        debts,
        lessons,
        primary_debt,
        primary_lesson,
        path_number: digit_root(sum),
    })
}
