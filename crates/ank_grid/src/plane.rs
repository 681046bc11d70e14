//! The eight lines of the grid and their strength.

use serde::Serialize;

/// A row, column or diagonal of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Plane {
    /// Top row 4-9-2.
    Mental,
    /// Middle row 3-5-7.
    Emotional,
    /// Bottom row 8-1-6.
    Practical,
    /// Left column 4-3-8.
    Thought,
    /// Middle column 9-5-1.
    Will,
    /// Right column 2-7-6.
    Action,
    /// Diagonal 4-5-6.
    Golden,
    /// Diagonal 2-5-8.
    Silver,
}

/// All eight planes: rows, then columns, then diagonals.
pub const ALL_PLANES: [Plane; 8] = [
    Plane::Mental,
    Plane::Emotional,
    Plane::Practical,
    Plane::Thought,
    Plane::Will,
    Plane::Action,
    Plane::Golden,
    Plane::Silver,
];

impl Plane {
    /// Digits on this line, in grid order.
    pub const fn numbers(self) -> [u8; 3] {
        match self {
            Self::Mental => [4, 9, 2],
            Self::Emotional => [3, 5, 7],
            Self::Practical => [8, 1, 6],
            Self::Thought => [4, 3, 8],
            Self::Will => [9, 5, 1],
            Self::Action => [2, 7, 6],
            Self::Golden => [4, 5, 6],
            Self::Silver => [2, 5, 8],
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Mental => "mental",
            Self::Emotional => "emotional",
            Self::Practical => "practical",
            Self::Thought => "thought",
            Self::Will => "will",
            Self::Action => "action",
            Self::Golden => "golden",
            Self::Silver => "silver",
        }
    }

    pub const fn all() -> &'static [Plane; 8] {
        &ALL_PLANES
    }
}

/// Strength of a line from the total digit count along it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PlaneStrength {
    Empty,
    Weak,
    Balanced,
    Strong,
    Dominant,
}

impl PlaneStrength {
    /// 0 empty, 1 weak, 2 balanced, 3 strong, 4+ dominant.
    pub const fn from_total(total: u32) -> Self {
        match total {
            0 => Self::Empty,
            1 => Self::Weak,
            2 => Self::Balanced,
            3 => Self::Strong,
            _ => Self::Dominant,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Weak => "weak",
            Self::Balanced => "balanced",
            Self::Strong => "strong",
            Self::Dominant => "dominant",
        }
    }
}

/// A plane with its digit total and strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlaneReading {
    #[serde(rename = "type")]
    pub plane: Plane,
    pub numbers: [u8; 3],
    pub total: u32,
    pub strength: PlaneStrength,
}

/// Read one plane from per-digit counts (index 0 = digit 1).
pub fn read_plane(plane: Plane, counts: &[u32; 9]) -> PlaneReading {
    let numbers = plane.numbers();
    let total = numbers.iter().map(|&d| counts[usize::from(d - 1)]).sum();
    PlaneReading {
        plane,
        numbers,
        total,
        strength: PlaneStrength::from_total(total),
    }
}

/// Read all eight planes.
pub fn read_planes(counts: &[u32; 9]) -> Vec<PlaneReading> {
    ALL_PLANES.iter().map(|&p| read_plane(p, counts)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LO_SHU_LAYOUT;

    #[test]
    fn thresholds() {
        assert_eq!(PlaneStrength::from_total(0), PlaneStrength::Empty);
        assert_eq!(PlaneStrength::from_total(1), PlaneStrength::Weak);
        assert_eq!(PlaneStrength::from_total(2), PlaneStrength::Balanced);
        assert_eq!(PlaneStrength::from_total(3), PlaneStrength::Strong);
        assert_eq!(PlaneStrength::from_total(4), PlaneStrength::Dominant);
        assert_eq!(PlaneStrength::from_total(40), PlaneStrength::Dominant);
    }

    #[test]
    fn rows_and_columns_follow_layout() {
        for (i, row) in LO_SHU_LAYOUT.iter().enumerate() {
            assert_eq!(ALL_PLANES[i].numbers(), *row);
        }
        for c in 0..3 {
            let col = [LO_SHU_LAYOUT[0][c], LO_SHU_LAYOUT[1][c], LO_SHU_LAYOUT[2][c]];
            assert_eq!(ALL_PLANES[3 + c].numbers(), col);
        }
    }

    #[test]
    fn plane_totals() {
        // 1 x4, 5 x1, 9 x2
        let counts = [4, 0, 0, 0, 1, 0, 0, 0, 2];
        let will = read_plane(Plane::Will, &counts);
        assert_eq!(will.total, 7);
        assert_eq!(will.strength, PlaneStrength::Dominant);
        let thought = read_plane(Plane::Thought, &counts);
        assert_eq!(thought.strength, PlaneStrength::Empty);
    }
}
