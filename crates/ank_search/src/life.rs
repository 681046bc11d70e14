//! Long-range views: nine-year life cycles, peak years and life stage.

use ank_core::{
    CycleTheme, NameConfig, ProfileInput, ReducedNumber, age_on, destiny_number_with,
    life_path_number, personal_year_number,
};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::error::Result;

/// Years in one cycle.
pub const CYCLE_YEARS: i32 = 9;
/// Cycles reported by [`life_cycles`].
pub const CYCLE_COUNT: u8 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeCycle {
    /// 1-based.
    pub cycle_number: u8,
    pub start_year: i32,
    /// Inclusive.
    pub end_year: i32,
    /// 1..=9 inside the active cycle, 0 for every other cycle.
    pub current_year_in_cycle: u8,
    pub theme: CycleTheme,
}

impl LifeCycle {
    pub fn contains(&self, year: i32) -> bool {
        (self.start_year..=self.end_year).contains(&year)
    }
}

/// Nine consecutive nine-year cycles starting at the birth year.
pub fn life_cycles(birth: NaiveDate, on: NaiveDate) -> Result<Vec<LifeCycle>> {
    ank_core::date::ensure_supported(birth)?;
    let year = on.year();
    let cycles = (1..=CYCLE_COUNT)
        .map(|n| {
            let start_year = birth.year() + CYCLE_YEARS * i32::from(n - 1);
            let end_year = start_year + CYCLE_YEARS - 1;
            let current_year_in_cycle = if (start_year..=end_year).contains(&year) {
                (year - start_year + 1) as u8
            } else {
                0
            };
            LifeCycle {
                cycle_number: n,
                start_year,
                end_year,
                current_year_in_cycle,
                theme: CycleTheme::from_digit(n).unwrap_or(CycleTheme::Completion),
            }
        })
        .collect();
    Ok(cycles)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PeakKind {
    /// Personal year equals the life path.
    LifePath,
    /// Personal year equals the destiny number.
    Destiny,
    /// Personal year 9.
    Major,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeakYear {
    pub year: i32,
    pub personal_year: ReducedNumber,
    pub kind: PeakKind,
}

/// Years in `from_year..=from_year + years_ahead` whose personal year
/// echoes the life path or destiny, or is a 9.
pub fn peak_years(
    profile: &ProfileInput,
    config: &NameConfig,
    from_year: i32,
    years_ahead: u32,
) -> Result<Vec<PeakYear>> {
    let birth = profile.birth_date();
    let life_path = life_path_number(birth)?;
    let destiny = destiny_number_with(profile.full_name(), config)?;

    let mut peaks = Vec::new();
    for offset in 0..=years_ahead as i32 {
        let year = from_year + offset;
        let personal_year = personal_year_number(birth, year)?;
        let kind = if personal_year == life_path {
            PeakKind::LifePath
        } else if personal_year == destiny {
            PeakKind::Destiny
        } else if personal_year.value() == 9 {
            PeakKind::Major
        } else {
            continue;
        };
        peaks.push(PeakYear {
            year,
            personal_year,
            kind,
        });
    }
    debug!(from_year, years_ahead, peaks = peaks.len(), "peak years");
    Ok(peaks)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LifeStageName {
    Beginnings,
    Development,
    Expression,
    Building,
    Exploration,
    Responsibility,
    Wisdom,
    Achievement,
    Completion,
}

pub const ALL_LIFE_STAGES: [LifeStageName; 9] = [
    LifeStageName::Beginnings,
    LifeStageName::Development,
    LifeStageName::Expression,
    LifeStageName::Building,
    LifeStageName::Exploration,
    LifeStageName::Responsibility,
    LifeStageName::Wisdom,
    LifeStageName::Achievement,
    LifeStageName::Completion,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeStage {
    /// 1..=9.
    pub stage: u8,
    pub age: u32,
    pub name: LifeStageName,
}

/// Stage = min(9, age / 9 + 1), age in completed years.
pub fn life_stage(birth: NaiveDate, on: NaiveDate) -> Result<LifeStage> {
    let age = age_on(birth, on)?;
    let stage = (age / 9 + 1).min(9) as u8;
    Ok(LifeStage {
        stage,
        age,
        name: ALL_LIFE_STAGES[usize::from(stage - 1)],
    })
}
