//! Two-person compatibility score.
//!
//! Overall score = round(0.5 * life path + 0.3 * destiny + 0.2 * soul urge),
//! each category looked up in the compatibility matrix. Personality is
//! scored too but carries no weight, and is skipped for names without
//! consonants.

use ank_core::{
    NameConfig, NumerologyError, NumerologyProfile, ProfileInput, ReducedNumber,
    destiny_number_with, life_path_number, personality_number_with, soul_urge_number_with,
};
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::matrix::compatibility_score;

/// Category weights in percent: life path, destiny, soul urge.
pub const BASE_WEIGHTS: Weights = Weights {
    life_path: 50,
    destiny: 30,
    soul_urge: 20,
};

/// Percent weights of the three scored categories. Sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Weights {
    pub life_path: u32,
    pub destiny: u32,
    pub soul_urge: u32,
}

impl Weights {
    /// Weighted mean of three category scores, rounded half up.
    pub fn apply(&self, life_path: u8, destiny: u8, soul_urge: u8) -> u8 {
        let total = self.life_path * u32::from(life_path)
            + self.destiny * u32::from(destiny)
            + self.soul_urge * u32::from(soul_urge);
        let sum = self.life_path + self.destiny + self.soul_urge;
        ((total + sum / 2) / sum) as u8
    }
}

/// Band of an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CompatibilityLevel {
    Challenging,
    Moderate,
    Good,
    VeryGood,
    Excellent,
}

impl CompatibilityLevel {
    /// >= 90 excellent, >= 75 very good, >= 60 good, >= 45 moderate.
    pub const fn from_score(score: u8) -> Self {
        match score {
            90.. => Self::Excellent,
            75..=89 => Self::VeryGood,
            60..=74 => Self::Good,
            45..=59 => Self::Moderate,
            _ => Self::Challenging,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::VeryGood => "veryGood",
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::Challenging => "challenging",
        }
    }
}

/// One category's matrix score and both people's numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub score: u8,
    pub person1: ReducedNumber,
    pub person2: ReducedNumber,
}

impl CategoryScore {
    pub fn new(person1: ReducedNumber, person2: ReducedNumber) -> Self {
        Self {
            score: compatibility_score(person1, person2),
            person1,
            person2,
        }
    }

    /// Absolute difference of the two raw values.
    pub fn gap(&self) -> u8 {
        self.person1.value().abs_diff(self.person2.value())
    }
}

/// The numbers a person brings to a compatibility reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityNumbers {
    pub life_path: ReducedNumber,
    pub destiny: ReducedNumber,
    pub soul_urge: ReducedNumber,
    /// `None` when the name has no consonants.
    pub personality: Option<ReducedNumber>,
}

impl CompatibilityNumbers {
    /// Compute the weighted numbers; only personality may be missing.
    pub fn compute(input: &ProfileInput, config: &NameConfig) -> Result<Self> {
        let name = input.full_name();
        let personality = match personality_number_with(name, config) {
            Ok(n) => Some(n),
            Err(NumerologyError::InsufficientInput(_)) => None,
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            life_path: life_path_number(input.birth_date())?,
            destiny: destiny_number_with(name, config)?,
            soul_urge: soul_urge_number_with(name, config)?,
            personality,
        })
    }
}

impl From<&NumerologyProfile> for CompatibilityNumbers {
    fn from(p: &NumerologyProfile) -> Self {
        Self {
            life_path: p.life_path,
            destiny: p.destiny,
            soul_urge: p.soul_urge,
            personality: Some(p.personality),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    pub overall_score: u8,
    pub level: CompatibilityLevel,
    pub life_path_compatibility: CategoryScore,
    pub destiny_compatibility: CategoryScore,
    pub soul_urge_compatibility: CategoryScore,
    /// Reported only; not part of the overall score. `None` unless both
    /// names have consonants.
    pub personality_compatibility: Option<CategoryScore>,
}

impl CompatibilityResult {
    /// Score two already computed number sets.
    pub fn from_numbers(p1: &CompatibilityNumbers, p2: &CompatibilityNumbers) -> Self {
        let life_path = CategoryScore::new(p1.life_path, p2.life_path);
        let destiny = CategoryScore::new(p1.destiny, p2.destiny);
        let soul_urge = CategoryScore::new(p1.soul_urge, p2.soul_urge);
        let personality = p1
            .personality
            .zip(p2.personality)
            .map(|(a, b)| CategoryScore::new(a, b));
        let overall_score = BASE_WEIGHTS.apply(life_path.score, destiny.score, soul_urge.score);
        Self {
            overall_score,
            level: CompatibilityLevel::from_score(overall_score),
            life_path_compatibility: life_path,
            destiny_compatibility: destiny,
            soul_urge_compatibility: soul_urge,
            personality_compatibility: personality,
        }
    }

    /// Score two full profiles.
    pub fn from_profiles(p1: &NumerologyProfile, p2: &NumerologyProfile) -> Self {
        Self::from_numbers(&p1.into(), &p2.into())
    }
}

/// Compatibility of two people with the default letter system.
pub fn calculate_compatibility(
    person1: &ProfileInput,
    person2: &ProfileInput,
) -> Result<CompatibilityResult> {
    calculate_compatibility_with(person1, person2, &NameConfig::default())
}

/// Compatibility of two people with an explicit letter system.
pub fn calculate_compatibility_with(
    person1: &ProfileInput,
    person2: &ProfileInput,
    config: &NameConfig,
) -> Result<CompatibilityResult> {
    let p1 = CompatibilityNumbers::compute(person1, config)?;
    let p2 = CompatibilityNumbers::compute(person2, config)?;
    let result = CompatibilityResult::from_numbers(&p1, &p2);
    debug!(
        overall = result.overall_score,
        level = result.level.code(),
        "compatibility"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_bands() {
        assert_eq!(CompatibilityLevel::from_score(100), CompatibilityLevel::Excellent);
        assert_eq!(CompatibilityLevel::from_score(90), CompatibilityLevel::Excellent);
        assert_eq!(CompatibilityLevel::from_score(89), CompatibilityLevel::VeryGood);
        assert_eq!(CompatibilityLevel::from_score(75), CompatibilityLevel::VeryGood);
        assert_eq!(CompatibilityLevel::from_score(74), CompatibilityLevel::Good);
        assert_eq!(CompatibilityLevel::from_score(60), CompatibilityLevel::Good);
        assert_eq!(CompatibilityLevel::from_score(59), CompatibilityLevel::Moderate);
        assert_eq!(CompatibilityLevel::from_score(45), CompatibilityLevel::Moderate);
        assert_eq!(CompatibilityLevel::from_score(44), CompatibilityLevel::Challenging);
        assert_eq!(CompatibilityLevel::from_score(0), CompatibilityLevel::Challenging);
    }

    #[test]
    fn personality_needs_both_names() {
        let n = |v| ReducedNumber::new(v).unwrap();
        let full = CompatibilityNumbers {
            life_path: n(9),
            destiny: n(3),
            soul_urge: n(6),
            personality: Some(n(6)),
        };
        let vowels_only = CompatibilityNumbers {
            personality: None,
            ..full
        };
        let both = CompatibilityResult::from_numbers(&full, &full);
        let one = CompatibilityResult::from_numbers(&full, &vowels_only);
        assert!(both.personality_compatibility.is_some());
        assert_eq!(one.personality_compatibility, None);
        assert_eq!(one.overall_score, both.overall_score);
    }

    #[test]
    fn weights_round_half_up() {
        // 0.5*85 + 0.3*50 + 0.2*55 = 68.5 -> 69
        assert_eq!(BASE_WEIGHTS.apply(85, 50, 55), 69);
        assert_eq!(BASE_WEIGHTS.apply(90, 90, 90), 90);
        assert_eq!(BASE_WEIGHTS.apply(40, 40, 40), 40);
    }
}
