//! Name-based calculators: Destiny, Soul Urge, Personality and friends.
//!
//! A full name is split on whitespace into words. Each word's letter values
//! are summed and reduced on their own, then the per-word results are summed
//! and reduced again. Soul Urge keeps vowels only, Personality consonants only.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::date::life_path_number;
use crate::error::{NumerologyError, Result};
use crate::letter::{LetterClass, NameConfig, classify_word};
use crate::reduce::{ReducedNumber, digit_root, reduce_sum};

/// Which letters of a word a calculator sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterFilter {
    All,
    Vowels,
    Consonants,
}

impl LetterFilter {
    const fn accepts(self, class: LetterClass) -> bool {
        match self {
            Self::All => true,
            Self::Vowels => matches!(class, LetterClass::Vowel),
            Self::Consonants => matches!(class, LetterClass::Consonant),
        }
    }

    const fn insufficient(self) -> NumerologyError {
        match self {
            Self::All => NumerologyError::InvalidInput("full name contains no letters"),
            Self::Vowels => NumerologyError::InsufficientInput("name has no vowels"),
            Self::Consonants => NumerologyError::InsufficientInput("name has no consonants"),
        }
    }
}

/// Reject names that are blank or carry no letters at all.
pub fn validate_name(full_name: &str) -> Result<()> {
    if full_name.trim().is_empty() {
        return Err(NumerologyError::InvalidInput("full name is empty"));
    }
    if !full_name.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(NumerologyError::InvalidInput("full name contains no letters"));
    }
    Ok(())
}

/// Raw per-word letter sums for the given filter. Words contributing no
/// letters are omitted.
pub fn word_sums(full_name: &str, filter: LetterFilter, config: &NameConfig) -> Vec<u32> {
    full_name
        .split_whitespace()
        .map(|word| {
            classify_word(word, config.y_rule)
                .into_iter()
                .filter(|&(_, class)| filter.accepts(class))
                .filter_map(|(c, _)| config.system.value(c))
                .map(u32::from)
                .sum::<u32>()
        })
        .filter(|&sum| sum > 0)
        .collect()
}

/// Sum of every filtered letter value across the whole name, without any
/// per-word reduction.
pub fn raw_letter_sum(full_name: &str, filter: LetterFilter, config: &NameConfig) -> u32 {
    word_sums(full_name, filter, config).into_iter().sum()
}

/// Generic per-word reduction shared by the three name numbers.
pub fn name_number(
    full_name: &str,
    filter: LetterFilter,
    config: &NameConfig,
) -> Result<ReducedNumber> {
    validate_name(full_name)?;
    let sums = word_sums(full_name, filter, config);
    if sums.is_empty() {
        return Err(filter.insufficient());
    }
    let mut total = 0u32;
    for sum in sums {
        total += u32::from(reduce_sum(sum)?);
    }
    reduce_sum(total)
}

/// Destiny (Expression) number from every letter of the name.
pub fn destiny_number(full_name: &str) -> Result<ReducedNumber> {
    destiny_number_with(full_name, &NameConfig::default())
}

/// Destiny number under an explicit letter system / Y rule.
pub fn destiny_number_with(full_name: &str, config: &NameConfig) -> Result<ReducedNumber> {
    let n = name_number(full_name, LetterFilter::All, config)?;
    debug!(destiny = n.value(), "destiny number");
    Ok(n)
}

/// Soul Urge (Heart's Desire) number from vowels only.
pub fn soul_urge_number(full_name: &str) -> Result<ReducedNumber> {
    soul_urge_number_with(full_name, &NameConfig::default())
}

/// Soul Urge number under an explicit letter system / Y rule.
pub fn soul_urge_number_with(full_name: &str, config: &NameConfig) -> Result<ReducedNumber> {
    let n = name_number(full_name, LetterFilter::Vowels, config)?;
    debug!(soul_urge = n.value(), "soul urge number");
    Ok(n)
}

/// Personality number from consonants only.
pub fn personality_number(full_name: &str) -> Result<ReducedNumber> {
    personality_number_with(full_name, &NameConfig::default())
}

/// Personality number under an explicit letter system / Y rule.
pub fn personality_number_with(full_name: &str, config: &NameConfig) -> Result<ReducedNumber> {
    let n = name_number(full_name, LetterFilter::Consonants, config)?;
    debug!(personality = n.value(), "personality number");
    Ok(n)
}

/// Maturity number: reduce(life path + destiny).
pub fn maturity_number(birth_date: NaiveDate, full_name: &str) -> Result<ReducedNumber> {
    let life_path = life_path_number(birth_date)?;
    let destiny = destiny_number(full_name)?;
    reduce_sum(u32::from(life_path) + u32::from(destiny))
}

/// Balance number: digit root of |soul urge - personality|, 0..=8.
///
/// 0 means inner desires and outer expression carry the same number.
pub fn balance_number(full_name: &str) -> Result<u8> {
    let soul = soul_urge_number(full_name)?.value();
    let personality = personality_number(full_name)?.value();
    Ok(digit_root(u64::from(soul.abs_diff(personality))))
}

/// Per-value letter counts (index 0 = value 1).
fn value_counts(full_name: &str, config: &NameConfig) -> [u32; 9] {
    let mut counts = [0u32; 9];
    for v in full_name.chars().filter_map(|c| config.system.value(c)) {
        counts[usize::from(v - 1)] += 1;
    }
    counts
}

/// Hidden passions: up to three letter values, most frequent first,
/// ties broken by the lower value.
pub fn hidden_passions(full_name: &str) -> Result<Vec<u8>> {
    validate_name(full_name)?;
    let counts = value_counts(full_name, &NameConfig::default());
    let mut ranked: Vec<(u8, u32)> = (1..=9u8)
        .zip(counts)
        .filter(|&(_, count)| count > 0)
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    Ok(ranked.into_iter().take(3).map(|(v, _)| v).collect())
}

/// Karmic lessons: values 1..=9 that no letter of the name carries.
pub fn karmic_lessons(full_name: &str) -> Result<Vec<u8>> {
    validate_name(full_name)?;
    let counts = value_counts(full_name, &NameConfig::default());
    Ok((1..=9u8).zip(counts).filter(|&(_, c)| c == 0).map(|(v, _)| v).collect())
}

/// Letter statistics for a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterDistribution {
    /// Uppercase letter -> occurrences.
    pub letter_counts: BTreeMap<char, u32>,
    /// Letter value -> occurrences (only values present).
    pub number_counts: BTreeMap<u8, u32>,
    pub vowels: u32,
    pub consonants: u32,
    /// Most frequent value; ties go to the lower value.
    pub most_frequent: u8,
    /// Least frequent present value; ties go to the lower value.
    pub least_frequent: u8,
    /// Values 1..=9 absent from the name.
    pub missing: Vec<u8>,
}

/// Analyze which letters and values occur in a name.
pub fn letter_distribution(full_name: &str) -> Result<LetterDistribution> {
    validate_name(full_name)?;
    let config = NameConfig::default();

    let mut letter_counts = BTreeMap::new();
    let mut number_counts = BTreeMap::new();
    let mut vowels = 0;
    let mut consonants = 0;
    for word in full_name.split_whitespace() {
        for (c, class) in classify_word(word, config.y_rule) {
            *letter_counts.entry(c).or_insert(0) += 1;
            if let Some(v) = config.system.value(c) {
                *number_counts.entry(v).or_insert(0) += 1;
            }
            match class {
                LetterClass::Vowel => vowels += 1,
                LetterClass::Consonant => consonants += 1,
            }
        }
    }

    // BTreeMap iterates ascending, so strict comparisons keep the lower value on ties.
    let mut most = (0u8, 0u32);
    let mut least = (0u8, u32::MAX);
    for (&v, &count) in &number_counts {
        if count > most.1 {
            most = (v, count);
        }
        if count < least.1 {
            least = (v, count);
        }
    }
    let missing = (1..=9u8).filter(|v| !number_counts.contains_key(v)).collect();

    Ok(LetterDistribution {
        letter_counts,
        number_counts,
        vowels,
        consonants,
        most_frequent: most.0,
        least_frequent: least.0,
        missing,
    })
}
