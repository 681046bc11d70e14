//! Validated profile input and the core numbers derived from it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::date::{birthday_number, ensure_supported, life_path_number};
use crate::error::Result;
use crate::letter::NameConfig;
use crate::name::{
    destiny_number_with, personality_number_with, soul_urge_number_with, validate_name,
};
use crate::reduce::{ReducedNumber, reduce_sum};

/// A person's full birth name and birth date.
///
/// Construction validates both, so downstream calculators can assume a
/// non-empty name and a supported date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    full_name: String,
    birth_date: NaiveDate,
}

impl ProfileInput {
    /// Validate and build. The name is stored trimmed.
    pub fn new(full_name: impl Into<String>, birth_date: NaiveDate) -> Result<Self> {
        let full_name = full_name.into().trim().to_string();
        validate_name(&full_name)?;
        ensure_supported(birth_date)?;
        Ok(Self {
            full_name,
            birth_date,
        })
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }
}

/// Core numbers for one person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyProfile {
    pub life_path: ReducedNumber,
    pub destiny: ReducedNumber,
    pub soul_urge: ReducedNumber,
    pub personality: ReducedNumber,
    pub birthday: ReducedNumber,
    pub maturity: ReducedNumber,
}

impl NumerologyProfile {
    /// Compute with the default letter system.
    pub fn compute(input: &ProfileInput) -> Result<Self> {
        Self::compute_with(input, &NameConfig::default())
    }

    /// Compute with an explicit letter system / Y rule.
    pub fn compute_with(input: &ProfileInput, config: &NameConfig) -> Result<Self> {
        let life_path = life_path_number(input.birth_date)?;
        let destiny = destiny_number_with(&input.full_name, config)?;
        let soul_urge = soul_urge_number_with(&input.full_name, config)?;
        let personality = personality_number_with(&input.full_name, config)?;
        let birthday = birthday_number(input.birth_date)?;
        let maturity = reduce_sum(u32::from(life_path) + u32::from(destiny))?;
        debug!(
            life_path = life_path.value(),
            destiny = destiny.value(),
            soul_urge = soul_urge.value(),
            personality = personality.value(),
            "profile computed"
        );
        Ok(Self {
            life_path,
            destiny,
            soul_urge,
            personality,
            birthday,
            maturity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NumerologyError;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn input_trims_name() {
        let input = ProfileInput::new("  Maria Elena Popescu ", d(1990, 11, 15)).unwrap();
        assert_eq!(input.full_name(), "Maria Elena Popescu");
    }

    #[test]
    fn input_rejects_blank_name() {
        assert!(matches!(
            ProfileInput::new("   ", d(1990, 11, 15)),
            Err(NumerologyError::InvalidInput(_))
        ));
    }

    #[test]
    fn full_profile() {
        let input = ProfileInput::new("Maria Elena Popescu", d(1990, 11, 15)).unwrap();
        let p = NumerologyProfile::compute(&input).unwrap();
        assert_eq!(p.life_path.value(), 9);
        assert_eq!(p.destiny.value(), 3);
        assert_eq!(p.soul_urge.value(), 9);
        assert_eq!(p.personality.value(), 3);
        assert_eq!(p.birthday.value(), 6);
        // 9 + 3 = 12 -> 3
        assert_eq!(p.maturity.value(), 3);
    }
}
