//! Deterministic numerology calculators.
//!
//! This crate provides:
//! - Digit reduction with master-number preservation (11, 22, 33)
//! - Pythagorean and Chaldean letter values
//! - Name numbers (Destiny, Soul Urge, Personality, Balance, Hidden Passion)
//! - Date numbers (Life Path, Birthday) and personal/universal cycles
//! - Pinnacles, challenges and karmic debts
//!
//! Every function is pure: no I/O, no clock, no global state. Dates are
//! Gregorian `chrono::NaiveDate` values with year >= 1.

pub mod chaldean;
pub mod cycles;
pub mod date;
pub mod error;
pub mod karmic;
pub mod letter;
pub mod name;
pub mod pinnacle;
pub mod profile;
pub mod reduce;
pub mod theme;

pub use chaldean::{
    ChaldeanAnalysis, CompoundNature, CompoundNumber, chaldean_analysis, chaldean_birth_number,
    chaldean_name_number, compound_nature,
};
pub use cycles::{
    personal_day_from_year, personal_day_number, personal_month_number, personal_year_number,
    universal_day_number, universal_month_number, universal_year_number,
};
pub use date::{
    DateComponents, age_on, birthday_number, calendar_date, date_components, date_digits,
    flat_digit_sum, life_path_number,
};
pub use error::NumerologyError;
pub use karmic::{
    DebtSource, KARMIC_DEBT_NUMBERS, KarmicDebt, KarmicPath, is_karmic_debt, karmic_debts,
    karmic_path,
};
pub use letter::{
    LetterClass, LetterSystem, NameConfig, YRule, chaldean_letter_value, is_vowel, letter_value,
};
pub use name::{
    LetterDistribution, balance_number, destiny_number, destiny_number_with, hidden_passions,
    karmic_lessons, letter_distribution, maturity_number, personality_number,
    personality_number_with, soul_urge_number, soul_urge_number_with,
};
pub use pinnacle::{
    Challenge, LAST_PINNACLE_END_AGE, Pinnacle, challenges, current_challenge, current_pinnacle,
    pinnacles,
};
pub use profile::{NumerologyProfile, ProfileInput};
pub use reduce::{
    ALL_REDUCED_VALUES, MASTER_NUMBERS, ReducedNumber, digit_root, digit_sum, reduce,
};
pub use theme::{ALL_THEMES, CycleTheme};
