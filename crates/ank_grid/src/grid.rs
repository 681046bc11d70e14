//! Lo Shu grid generation from a birth date.

use ank_core::error::Result;
use ank_core::date_digits;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::arrow::{Arrow, ArrowDirection, ArrowKind, detect_arrows};
use crate::element::{Element, dominant_element};
use crate::layout::position;
use crate::plane::{Plane, PlaneReading, PlaneStrength, read_planes};
use crate::remedy::{NumberRemedy, remedy};

/// A digit that occurs more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RepeatedNumber {
    pub number: u8,
    pub count: u32,
}

/// Structured summary of planes, arrows and gaps. No text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoShuAnalysis {
    /// Planes rated strong or dominant.
    pub strong_planes: Vec<Plane>,
    /// Planes rated empty or weak.
    pub weak_planes: Vec<Plane>,
    pub positive_arrows: Vec<ArrowKind>,
    pub negative_arrows: Vec<ArrowKind>,
    /// Missing digits, each of which has a remedy.
    pub remedies: Vec<u8>,
}

/// Complete Lo Shu reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoShuGrid {
    /// Occurrence counts laid out as 4-9-2 / 3-5-7 / 8-1-6.
    pub grid: [[u32; 3]; 3],
    /// Occurrences per digit, index 0 = digit 1.
    pub counts: [u32; 9],
    pub present_numbers: Vec<u8>,
    pub missing_numbers: Vec<u8>,
    pub repeated_numbers: Vec<RepeatedNumber>,
    pub planes: Vec<PlaneReading>,
    pub arrows: Vec<Arrow>,
    pub dominant_element: Element,
    pub analysis: LoShuAnalysis,
}

impl LoShuGrid {
    /// Occurrences of a digit 1..=9; 0 for anything else.
    pub fn count(&self, digit: u8) -> u32 {
        match digit {
            1..=9 => self.counts[usize::from(digit - 1)],
            _ => 0,
        }
    }

    /// Total of all cells.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn plane(&self, plane: Plane) -> Option<&PlaneReading> {
        self.planes.iter().find(|p| p.plane == plane)
    }

    /// Remedy entries for the digits listed in the analysis.
    pub fn remedies(&self) -> Vec<&'static NumberRemedy> {
        self.analysis
            .remedies
            .iter()
            .filter_map(|&d| remedy(d))
            .collect()
    }
}

/// Nonzero digits of day, month and four-digit year, in that order.
pub fn birth_date_digits(birth_date: NaiveDate) -> Result<Vec<u8>> {
    Ok(date_digits(birth_date)?
        .into_iter()
        .filter(|&d| d != 0)
        .collect())
}

/// Build the grid for a birth date.
pub fn generate_lo_shu_grid(birth_date: NaiveDate) -> Result<LoShuGrid> {
    let mut grid = [[0u32; 3]; 3];
    let mut counts = [0u32; 9];
    for digit in birth_date_digits(birth_date)? {
        if let Some((row, col)) = position(digit) {
            grid[row][col] += 1;
            counts[usize::from(digit - 1)] += 1;
        }
    }

    let mut present_numbers = Vec::new();
    let mut missing_numbers = Vec::new();
    let mut repeated_numbers = Vec::new();
    for (number, &count) in (1..=9u8).zip(counts.iter()) {
        if count == 0 {
            missing_numbers.push(number);
            continue;
        }
        present_numbers.push(number);
        if count > 1 {
            repeated_numbers.push(RepeatedNumber { number, count });
        }
    }

    let planes = read_planes(&counts);
    let arrows = detect_arrows(&counts);
    let dominant_element = dominant_element(&counts);
    let analysis = analyze(&planes, &arrows, &missing_numbers);

    debug!(
        %birth_date,
        present = present_numbers.len(),
        arrows = arrows.len(),
        element = dominant_element.name(),
        "lo shu grid"
    );

    Ok(LoShuGrid {
        grid,
        counts,
        present_numbers,
        missing_numbers,
        repeated_numbers,
        planes,
        arrows,
        dominant_element,
        analysis,
    })
}

fn analyze(planes: &[PlaneReading], arrows: &[Arrow], missing: &[u8]) -> LoShuAnalysis {
    let planes_where = |keep: fn(PlaneStrength) -> bool| -> Vec<Plane> {
        planes
            .iter()
            .filter(|p| keep(p.strength))
            .map(|p| p.plane)
            .collect()
    };
    let arrows_toward = |direction: ArrowDirection| -> Vec<ArrowKind> {
        arrows
            .iter()
            .filter(|a| a.direction == direction)
            .map(|a| a.kind)
            .collect()
    };
    LoShuAnalysis {
        strong_planes: planes_where(|s| s >= PlaneStrength::Strong),
        weak_planes: planes_where(|s| s <= PlaneStrength::Weak),
        positive_arrows: arrows_toward(ArrowDirection::Positive),
        negative_arrows: arrows_toward(ArrowDirection::Negative),
        remedies: missing.to_vec(),
    }
}
