//! Relationship-specific readings on top of the base compatibility.
//!
//! The base overall score is kept as is. Each relationship type also gets
//! its own weighted score, which drives the recommendations, plus coded
//! strengths, challenges and dynamics.

use ank_core::{NameConfig, ProfileInput, ReducedNumber};
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::score::{CategoryScore, CompatibilityNumbers, CompatibilityResult, Weights};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationshipType {
    Romantic,
    Friendship,
    Professional,
    Family,
}

pub const ALL_RELATIONSHIPS: [RelationshipType; 4] = [
    RelationshipType::Romantic,
    RelationshipType::Friendship,
    RelationshipType::Professional,
    RelationshipType::Family,
];

impl RelationshipType {
    /// Category weights emphasising what matters for this relationship.
    pub const fn weights(self) -> Weights {
        match self {
            Self::Romantic => Weights {
                life_path: 40,
                destiny: 20,
                soul_urge: 40,
            },
            Self::Friendship => Weights {
                life_path: 35,
                destiny: 35,
                soul_urge: 30,
            },
            Self::Professional => Weights {
                life_path: 50,
                destiny: 40,
                soul_urge: 10,
            },
            Self::Family => Weights {
                life_path: 45,
                destiny: 20,
                soul_urge: 35,
            },
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Romantic => "romantic",
            Self::Friendship => "friendship",
            Self::Professional => "professional",
            Self::Family => "family",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Strength {
    SimilarLifePaths,
    AlignedInnerDesires,
    MutualSensitivity,
    IdenticalLifePaths,
    SharedValues,
    LeadershipAndAmbition,
    ComplementaryTalents,
    FamilyCare,
    SimilarFamilyValues,
    /// Nothing specific stood out.
    SolidFoundation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Challenge {
    DifferentLifeApproaches,
    DifferentInnerDesires,
    IndependenceVersusCooperation,
    DifferentPerspectives,
    CompetingLeadership,
    GenerationalValues,
    /// Nothing specific stood out.
    MinorChallenges,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Recommendation {
    MaintainOpenCommunication,
    CelebrateConnection,
    ExploreSharedPassions,
    InvestInCommunication,
    GrowThroughDifferences,
    CreateRomanticRituals,
    HonestCommunication,
    SeekCommonGround,
    ConsiderCounseling,
    RespectDifferences,
    CreateMemories,
    ClarifyRoles,
    CommunicateGoals,
    BuildTrustThroughResults,
    RespectGenerations,
    CreateFamilyTraditions,
}

/// Whether one facet of the relationship flows or needs work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Tone {
    Harmonious,
    NeedsEffort,
}

impl Tone {
    fn when(harmonious: bool) -> Self {
        if harmonious {
            Self::Harmonious
        } else {
            Self::NeedsEffort
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dynamics {
    pub communication: Tone,
    pub emotional: Tone,
    pub practical: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedCompatibility {
    #[serde(flatten)]
    pub base: CompatibilityResult,
    pub relationship_type: RelationshipType,
    /// Overall score re-weighted for the relationship type.
    pub relationship_score: u8,
    pub strengths: Vec<Strength>,
    pub challenges: Vec<Challenge>,
    pub recommendations: Vec<Recommendation>,
    pub dynamics: Dynamics,
}

fn either_is(a: ReducedNumber, b: ReducedNumber, value: u8) -> bool {
    a.value() == value || b.value() == value
}

fn strengths(
    kind: RelationshipType,
    lp: &CategoryScore,
    destiny: &CategoryScore,
    soul: &CategoryScore,
) -> Vec<Strength> {
    let mut out = Vec::new();
    match kind {
        RelationshipType::Romantic => {
            if lp.gap() <= 1 {
                out.push(Strength::SimilarLifePaths);
            }
            if soul.gap() <= 1 {
                out.push(Strength::AlignedInnerDesires);
            }
            let caring = either_is(soul.person1, soul.person2, 2)
                || either_is(soul.person1, soul.person2, 6);
            if caring {
                out.push(Strength::MutualSensitivity);
            }
        }
        RelationshipType::Friendship => {
            if lp.gap() == 0 {
                out.push(Strength::IdenticalLifePaths);
            }
            if lp.gap() <= 1 {
                out.push(Strength::SharedValues);
            }
        }
        RelationshipType::Professional => {
            if either_is(lp.person1, lp.person2, 1) || either_is(lp.person1, lp.person2, 8) {
                out.push(Strength::LeadershipAndAmbition);
            }
            if either_is(destiny.person1, destiny.person2, 4)
                || either_is(destiny.person1, destiny.person2, 8)
            {
                out.push(Strength::ComplementaryTalents);
            }
        }
        RelationshipType::Family => {
            if either_is(soul.person1, soul.person2, 6) {
                out.push(Strength::FamilyCare);
            }
            if lp.gap() <= 2 {
                out.push(Strength::SimilarFamilyValues);
            }
        }
    }
    if out.is_empty() {
        out.push(Strength::SolidFoundation);
    }
    out
}

fn challenges(kind: RelationshipType, lp: &CategoryScore, soul: &CategoryScore) -> Vec<Challenge> {
    let mut out = Vec::new();
    match kind {
        RelationshipType::Romantic => {
            if lp.gap() > 4 {
                out.push(Challenge::DifferentLifeApproaches);
            }
            if soul.gap() > 4 {
                out.push(Challenge::DifferentInnerDesires);
            }
            if either_is(lp.person1, lp.person2, 1) && either_is(lp.person1, lp.person2, 2) {
                out.push(Challenge::IndependenceVersusCooperation);
            }
        }
        RelationshipType::Friendship => {
            if lp.gap() > 5 {
                out.push(Challenge::DifferentPerspectives);
            }
        }
        RelationshipType::Professional => {
            if lp.person1.value() == 1 && lp.person2.value() == 1 {
                out.push(Challenge::CompetingLeadership);
            }
        }
        RelationshipType::Family => {
            if lp.gap() > 4 {
                out.push(Challenge::GenerationalValues);
            }
        }
    }
    if out.is_empty() {
        out.push(Challenge::MinorChallenges);
    }
    out
}

fn recommendations(kind: RelationshipType, score: u8) -> Vec<Recommendation> {
    use Recommendation as R;
    match kind {
        RelationshipType::Romantic if score >= 85 => vec![
            R::MaintainOpenCommunication,
            R::CelebrateConnection,
            R::ExploreSharedPassions,
        ],
        RelationshipType::Romantic if score >= 70 => vec![
            R::InvestInCommunication,
            R::GrowThroughDifferences,
            R::CreateRomanticRituals,
        ],
        RelationshipType::Romantic => vec![
            R::HonestCommunication,
            R::SeekCommonGround,
            R::ConsiderCounseling,
        ],
        RelationshipType::Friendship => vec![
            R::MaintainOpenCommunication,
            R::RespectDifferences,
            R::CreateMemories,
        ],
        RelationshipType::Professional => vec![
            R::ClarifyRoles,
            R::CommunicateGoals,
            R::BuildTrustThroughResults,
        ],
        RelationshipType::Family => vec![
            R::MaintainOpenCommunication,
            R::RespectGenerations,
            R::CreateFamilyTraditions,
        ],
    }
}

fn dynamics(kind: RelationshipType, lp: &CategoryScore, soul: &CategoryScore) -> Dynamics {
    match kind {
        RelationshipType::Romantic => Dynamics {
            communication: Tone::when(soul.gap() == 0),
            emotional: Tone::when(soul.gap() <= 2),
            practical: Tone::when(lp.gap() <= 2),
        },
        _ => Dynamics {
            communication: Tone::Harmonious,
            emotional: Tone::Harmonious,
            practical: Tone::Harmonious,
        },
    }
}

impl DetailedCompatibility {
    /// Relationship reading of an existing base result.
    pub fn from_result(base: CompatibilityResult, relationship_type: RelationshipType) -> Self {
        let lp = &base.life_path_compatibility;
        let destiny = &base.destiny_compatibility;
        let soul = &base.soul_urge_compatibility;
        let relationship_score = relationship_type
            .weights()
            .apply(lp.score, destiny.score, soul.score);
        Self {
            relationship_type,
            relationship_score,
            strengths: strengths(relationship_type, lp, destiny, soul),
            challenges: challenges(relationship_type, lp, soul),
            recommendations: recommendations(relationship_type, relationship_score),
            dynamics: dynamics(relationship_type, lp, soul),
            base,
        }
    }
}

/// Compatibility with relationship-specific strengths, challenges and dynamics.
pub fn detailed_compatibility(
    person1: &ProfileInput,
    person2: &ProfileInput,
    relationship_type: RelationshipType,
) -> Result<DetailedCompatibility> {
    let config = NameConfig::default();
    let p1 = CompatibilityNumbers::compute(person1, &config)?;
    let p2 = CompatibilityNumbers::compute(person2, &config)?;
    let base = CompatibilityResult::from_numbers(&p1, &p2);
    let detailed = DetailedCompatibility::from_result(base, relationship_type);
    debug!(
        relationship = relationship_type.name(),
        overall = detailed.base.overall_score,
        relationship_score = detailed.relationship_score,
        "detailed compatibility"
    );
    Ok(detailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: u8) -> ReducedNumber {
        ReducedNumber::new(v).unwrap()
    }

    fn result(lp: (u8, u8), destiny: (u8, u8), soul: (u8, u8)) -> CompatibilityResult {
        let p = |lp, d, s| CompatibilityNumbers {
            life_path: n(lp),
            destiny: n(d),
            soul_urge: n(s),
            personality: None,
        };
        CompatibilityResult::from_numbers(&p(lp.0, destiny.0, soul.0), &p(lp.1, destiny.1, soul.1))
    }

    #[test]
    fn base_score_is_kept() {
        let base = result((1, 3), (4, 8), (2, 6));
        for kind in ALL_RELATIONSHIPS {
            let d = DetailedCompatibility::from_result(base, kind);
            assert_eq!(d.base.overall_score, base.overall_score);
        }
    }

    #[test]
    fn romantic_reading() {
        // LP 1/2 (60), destiny 4/8 (95), soul 2/2 (85)
        let d = DetailedCompatibility::from_result(
            result((1, 2), (4, 8), (2, 2)),
            RelationshipType::Romantic,
        );
        // 0.4*60 + 0.2*95 + 0.4*85 = 77
        assert_eq!(d.relationship_score, 77);
        assert_eq!(
            d.strengths,
            vec![
                Strength::SimilarLifePaths,
                Strength::AlignedInnerDesires,
                Strength::MutualSensitivity
            ]
        );
        assert_eq!(d.challenges, vec![Challenge::IndependenceVersusCooperation]);
        assert_eq!(d.recommendations[0], Recommendation::InvestInCommunication);
        assert_eq!(d.dynamics.communication, Tone::Harmonious);
    }

    #[test]
    fn empty_lists_get_fallbacks() {
        let d = DetailedCompatibility::from_result(
            result((3, 7), (3, 5), (3, 5)),
            RelationshipType::Friendship,
        );
        assert_eq!(d.strengths, vec![Strength::SolidFoundation]);
        assert_eq!(d.challenges, vec![Challenge::MinorChallenges]);
    }

    #[test]
    fn professional_leadership_clash() {
        let d = DetailedCompatibility::from_result(
            result((1, 1), (2, 3), (5, 5)),
            RelationshipType::Professional,
        );
        assert_eq!(d.strengths, vec![Strength::LeadershipAndAmbition]);
        assert_eq!(d.challenges, vec![Challenge::CompetingLeadership]);
    }

    #[test]
    fn romantic_dynamics_need_effort_when_apart() {
        let d = DetailedCompatibility::from_result(
            result((1, 9), (1, 1), (1, 9)),
            RelationshipType::Romantic,
        );
        assert_eq!(d.dynamics.communication, Tone::NeedsEffort);
        assert_eq!(d.dynamics.emotional, Tone::NeedsEffort);
        assert_eq!(d.dynamics.practical, Tone::NeedsEffort);
        assert!(d.challenges.contains(&Challenge::DifferentLifeApproaches));
    }
}
