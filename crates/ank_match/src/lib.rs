//! Numerology compatibility between two or more people.
//!
//! Pair scores come from a fixed symmetric matrix over the reduced values
//! and are combined 50/30/20 across life path, destiny and soul urge.

pub mod error;
pub mod group;
pub mod matrix;
pub mod relationship;
pub mod score;

pub use error::MatchError;
pub use group::{
    DominantNumbers, GroupAnalysis, GroupMember, GroupNote, GroupType, MultiPersonComparison,
    PairCompatibility, analyze_group, compare_people, group_harmony,
};
pub use matrix::{COMPATIBILITY_MATRIX, compatibility_score};
pub use relationship::{
    ALL_RELATIONSHIPS, Challenge, DetailedCompatibility, Dynamics, Recommendation,
    RelationshipType, Strength, Tone, detailed_compatibility,
};
pub use score::{
    BASE_WEIGHTS, CategoryScore, CompatibilityLevel, CompatibilityNumbers, CompatibilityResult,
    Weights,
    calculate_compatibility, calculate_compatibility_with,
};
