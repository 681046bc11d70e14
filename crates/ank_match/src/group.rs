//! Multi-person compatibility: pair tables, group harmony, dominant numbers.

use ank_core::{CycleTheme, NameConfig, ProfileInput, ReducedNumber};
use serde::Serialize;
use tracing::debug;

use crate::error::{MatchError, Result};
use crate::score::{CompatibilityNumbers, CompatibilityResult};

/// Minimum group size for [`compare_people`].
pub const MIN_COMPARISON_SIZE: usize = 3;
/// Minimum group size for [`analyze_group`].
pub const MIN_GROUP_SIZE: usize = 2;
/// Pairs listed as strongest / weakest, and dominant numbers kept.
const TOP_N: usize = 3;

/// A named person in a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupMember {
    pub id: String,
    pub input: ProfileInput,
}

impl GroupMember {
    pub fn new(id: impl Into<String>, input: ProfileInput) -> Self {
        Self {
            id: id.into(),
            input,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairCompatibility {
    pub person1_id: String,
    pub person2_id: String,
    pub compatibility: CompatibilityResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupType {
    Family,
    Team,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupNote {
    VeryHarmonious,
    GoodCompatibility,
    ModerateCompatibility,
    LargeGroupNeedsStructure,
    SimilarLifePaths,
    ComplementaryTalents,
    StrongFamilyBond,
    EfficientTeamwork,
    DiverseLifePaths,
    GenerationalPerspectives,
    RolesNeedClarity,
    MaintainCommunication,
    CelebrateHarmony,
    InvestInUnderstanding,
    SeekCommonGround,
    OpenCommunication,
    TeamBuilding,
    CreateFamilyTraditions,
    ClarifyCommonGoals,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiPersonComparison {
    pub pair_compatibilities: Vec<PairCompatibility>,
    pub average_compatibility: u8,
    pub group_harmony: u8,
    pub strongest_pairs: Vec<PairCompatibility>,
    pub weakest_pairs: Vec<PairCompatibility>,
    pub recommendations: Vec<GroupNote>,
}

/// Most frequent digit roots per category, up to three each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DominantNumbers {
    pub life_path: Vec<u8>,
    pub destiny: Vec<u8>,
    pub soul_urge: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupAnalysis {
    pub group_type: GroupType,
    pub group_harmony: u8,
    pub dominant_numbers: DominantNumbers,
    /// Theme of the most common life path root.
    pub group_energy: CycleTheme,
    pub strengths: Vec<GroupNote>,
    pub challenges: Vec<GroupNote>,
    pub recommendations: Vec<GroupNote>,
}

fn profiles(people: &[GroupMember]) -> Result<Vec<CompatibilityNumbers>> {
    let config = NameConfig::default();
    people
        .iter()
        .map(|m| CompatibilityNumbers::compute(&m.input, &config))
        .collect()
}

fn pairs(people: &[GroupMember], profiles: &[CompatibilityNumbers]) -> Vec<PairCompatibility> {
    let mut out = Vec::new();
    for i in 0..people.len() {
        for j in i + 1..people.len() {
            out.push(PairCompatibility {
                person1_id: people[i].id.clone(),
                person2_id: people[j].id.clone(),
                compatibility: CompatibilityResult::from_numbers(&profiles[i], &profiles[j]),
            });
        }
    }
    out
}

/// mean + max(0, 10 - stddev / 5), capped at 100. Empty input is 100.
fn harmony_of(scores: &[u8]) -> u8 {
    if scores.is_empty() {
        return 100;
    }
    let n = scores.len() as f64;
    let mean = scores.iter().map(|&s| f64::from(s)).sum::<f64>() / n;
    let variance = scores
        .iter()
        .map(|&s| (f64::from(s) - mean).powi(2))
        .sum::<f64>()
        / n;
    let bonus = (10.0 - variance.sqrt() / 5.0).max(0.0);
    (mean + bonus).round().min(100.0) as u8
}

/// Harmony score 0..=100 over every pair in the group.
///
/// Fewer than two people is trivially harmonious (100).
pub fn group_harmony(people: &[GroupMember]) -> Result<u8> {
    let profiles = profiles(people)?;
    let scores: Vec<u8> = pairs(people, &profiles)
        .iter()
        .map(|p| p.compatibility.overall_score)
        .collect();
    Ok(harmony_of(&scores))
}

fn require(people: &[GroupMember], required: usize) -> Result<()> {
    if people.len() < required {
        return Err(MatchError::NotEnoughPeople {
            required,
            given: people.len(),
        });
    }
    Ok(())
}

/// Compare three or more people pairwise.
pub fn compare_people(people: &[GroupMember]) -> Result<MultiPersonComparison> {
    require(people, MIN_COMPARISON_SIZE)?;
    let profiles = profiles(people)?;
    let pair_compatibilities = pairs(people, &profiles);

    let scores: Vec<u8> = pair_compatibilities
        .iter()
        .map(|p| p.compatibility.overall_score)
        .collect();
    let total: u32 = scores.iter().map(|&s| u32::from(s)).sum();
    let count = scores.len() as u32;
    let average_compatibility = ((total + count / 2) / count) as u8;
    let group_harmony = harmony_of(&scores);

    let mut sorted = pair_compatibilities.clone();
    sorted.sort_by(|a, b| {
        b.compatibility
            .overall_score
            .cmp(&a.compatibility.overall_score)
    });
    let top = TOP_N.min(sorted.len());
    let strongest_pairs = sorted[..top].to_vec();
    let weakest_pairs = sorted[sorted.len() - top..].to_vec();

    let mut recommendations = Vec::new();
    if average_compatibility >= 80 && group_harmony >= 80 {
        recommendations.push(GroupNote::VeryHarmonious);
    } else if average_compatibility >= 70 {
        recommendations.push(GroupNote::GoodCompatibility);
    } else {
        recommendations.push(GroupNote::ModerateCompatibility);
    }
    if people.len() > 5 {
        recommendations.push(GroupNote::LargeGroupNeedsStructure);
    }

    debug!(
        people = people.len(),
        average = average_compatibility,
        harmony = group_harmony,
        "compared people"
    );

    Ok(MultiPersonComparison {
        pair_compatibilities,
        average_compatibility,
        group_harmony,
        strongest_pairs,
        weakest_pairs,
        recommendations,
    })
}

/// Up to three digit roots ordered by frequency; ties keep first appearance.
fn dominant(numbers: impl Iterator<Item = ReducedNumber>) -> Vec<u8> {
    let mut freq: Vec<(u8, u32)> = Vec::new();
    for n in numbers {
        let root = n.root();
        match freq.iter_mut().find(|(v, _)| *v == root) {
            Some((_, c)) => *c += 1,
            None => freq.push((root, 1)),
        }
    }
    freq.sort_by(|a, b| b.1.cmp(&a.1));
    freq.into_iter().take(TOP_N).map(|(v, _)| v).collect()
}

/// Analyse a group of two or more people.
pub fn analyze_group(people: &[GroupMember], group_type: GroupType) -> Result<GroupAnalysis> {
    require(people, MIN_GROUP_SIZE)?;
    let profiles = profiles(people)?;
    let scores: Vec<u8> = pairs(people, &profiles)
        .iter()
        .map(|p| p.compatibility.overall_score)
        .collect();
    let group_harmony = harmony_of(&scores);

    let dominant_numbers = DominantNumbers {
        life_path: dominant(profiles.iter().map(|p| p.life_path)),
        destiny: dominant(profiles.iter().map(|p| p.destiny)),
        soul_urge: dominant(profiles.iter().map(|p| p.soul_urge)),
    };
    let group_energy = dominant_numbers
        .life_path
        .first()
        .and_then(|&d| CycleTheme::from_digit(d))
        .unwrap_or(CycleTheme::Beginnings);

    let mut strengths = Vec::new();
    if dominant_numbers.life_path.len() == 1 {
        strengths.push(GroupNote::SimilarLifePaths);
    }
    if dominant_numbers.destiny.len() == 1 {
        strengths.push(GroupNote::ComplementaryTalents);
    }
    let mut challenges = Vec::new();
    if dominant_numbers.life_path.len() > 2 {
        challenges.push(GroupNote::DiverseLifePaths);
    }
    let mut recommendations = if group_harmony >= 80 {
        vec![GroupNote::MaintainCommunication, GroupNote::CelebrateHarmony]
    } else if group_harmony >= 60 {
        vec![GroupNote::InvestInUnderstanding, GroupNote::SeekCommonGround]
    } else {
        vec![GroupNote::OpenCommunication, GroupNote::TeamBuilding]
    };
    match group_type {
        GroupType::Family => {
            strengths.push(GroupNote::StrongFamilyBond);
            challenges.push(GroupNote::GenerationalPerspectives);
            recommendations.push(GroupNote::CreateFamilyTraditions);
        }
        GroupType::Team => {
            strengths.push(GroupNote::EfficientTeamwork);
            challenges.push(GroupNote::RolesNeedClarity);
            recommendations.push(GroupNote::ClarifyCommonGoals);
        }
        GroupType::General => {}
    }

    debug!(people = people.len(), harmony = group_harmony, "group analysis");

    Ok(GroupAnalysis {
        group_type,
        group_harmony,
        dominant_numbers,
        group_energy,
        strengths,
        challenges,
        recommendations,
    })
}
