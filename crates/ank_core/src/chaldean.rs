//! Chaldean system: compound numbers and their nature.
//!
//! Chaldean numerology sums letters over the whole name (values 1..=8) and
//! keeps the unreduced "compound" total alongside its single digit. The
//! birth number uses the day of month only.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::date::ensure_supported;
use crate::error::Result;
use crate::letter::{LetterSystem, NameConfig, YRule};
use crate::name::{LetterFilter, raw_letter_sum, validate_name};
use crate::reduce::digit_root;

/// A compound total and its single-digit root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompoundNumber {
    pub compound: u32,
    pub single: u8,
}

impl CompoundNumber {
    pub fn new(compound: u32) -> Self {
        Self {
            compound,
            single: digit_root(u64::from(compound)),
        }
    }

    /// Nature of the compound part, if it has a traditional reading.
    pub fn nature(&self) -> Option<CompoundNature> {
        compound_nature(self.compound)
    }
}

/// Traditional reading of a compound number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CompoundNature {
    Positive,
    Negative,
    Neutral,
}

/// Lowest compound number with a reading.
pub const FIRST_COMPOUND: u32 = 10;
/// Highest compound number with a reading.
pub const LAST_COMPOUND: u32 = 52;

/// Natures for compounds 10..=52.
const COMPOUND_NATURES: [CompoundNature; 43] = {
    use CompoundNature::{Negative as N, Neutral as U, Positive as P};
    [
        U, N, N, U, U, U, N, P, N, P, // 10-19
        P, P, N, P, P, U, N, P, N, N, // 20-29
        U, P, P, P, U, P, P, P, N, U, // 30-39
        P, P, P, N, N, P, P, U, P, P, // 40-49
        P, U, P, // 50-52
    ]
};

/// Nature of a compound number in 10..=52.
pub fn compound_nature(compound: u32) -> Option<CompoundNature> {
    if !(FIRST_COMPOUND..=LAST_COMPOUND).contains(&compound) {
        return None;
    }
    Some(COMPOUND_NATURES[(compound - FIRST_COMPOUND) as usize])
}

const CHALDEAN: NameConfig = NameConfig::new(LetterSystem::Chaldean, YRule::Consonant);

/// Chaldean name number over the whole name.
pub fn chaldean_name_number(full_name: &str) -> Result<CompoundNumber> {
    validate_name(full_name)?;
    Ok(CompoundNumber::new(raw_letter_sum(
        full_name,
        LetterFilter::All,
        &CHALDEAN,
    )))
}

/// Chaldean birth number from the day of month.
pub fn chaldean_birth_number(birth_date: NaiveDate) -> Result<CompoundNumber> {
    ensure_supported(birth_date)?;
    Ok(CompoundNumber::new(birth_date.day()))
}

/// Name number, birth number, and their combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChaldeanAnalysis {
    pub name_number: CompoundNumber,
    pub birth_number: CompoundNumber,
    /// Sum of the two single digits.
    pub destiny_number: CompoundNumber,
    /// Uppercase letter and its Chaldean value, in name order.
    pub letters: Vec<(char, u8)>,
}

/// Full Chaldean reading of a name and birth date.
pub fn chaldean_analysis(full_name: &str, birth_date: NaiveDate) -> Result<ChaldeanAnalysis> {
    let name_number = chaldean_name_number(full_name)?;
    let birth_number = chaldean_birth_number(birth_date)?;
    let destiny_number =
        CompoundNumber::new(u32::from(name_number.single) + u32::from(birth_number.single));
    let letters = full_name
        .chars()
        .filter_map(|c| {
            LetterSystem::Chaldean
                .value(c)
                .map(|v| (c.to_ascii_uppercase(), v))
        })
        .collect();
    Ok(ChaldeanAnalysis {
        name_number,
        birth_number,
        destiny_number,
        letters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_number_keeps_compound() {
        // M4 A1 R2 I1 A1 = 9
        let n = chaldean_name_number("Maria").unwrap();
        assert_eq!(n, CompoundNumber { compound: 9, single: 9 });
        // S3 O7 P8 H5 I1 A1 = 25 -> 7
        let n = chaldean_name_number("Sophia").unwrap();
        assert_eq!(n.compound, 25);
        assert_eq!(n.single, 7);
        assert_eq!(n.nature(), Some(CompoundNature::Neutral));
    }

    #[test]
    fn natures_at_bounds() {
        assert_eq!(compound_nature(9), None);
        assert_eq!(compound_nature(10), Some(CompoundNature::Neutral));
        assert_eq!(compound_nature(17), Some(CompoundNature::Positive));
        assert_eq!(compound_nature(16), Some(CompoundNature::Negative));
        assert_eq!(compound_nature(52), Some(CompoundNature::Positive));
        assert_eq!(compound_nature(53), None);
    }

    #[test]
    fn analysis_combines_singles() {
        let birth = NaiveDate::from_ymd_opt(1990, 5, 28).unwrap();
        let a = chaldean_analysis("Sophia", birth).unwrap();
        assert_eq!(a.birth_number, CompoundNumber { compound: 28, single: 1 });
        // 7 + 1 = 8
        assert_eq!(a.destiny_number.single, 8);
        assert_eq!(a.letters.len(), 6);
        assert_eq!(a.letters[0], ('S', 3));
    }
}
